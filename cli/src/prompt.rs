//! Interactive prompts over any line reader and writer

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use anyhow::{bail, Result};
use tracing::warn;
use cycle_detection::Category;
use crate::config::{ConfigError, ConfigFlags, RunConfig};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Merge flags and prompt answers into a validated configuration
    ///
    /// A flag pointing at an existing folder is used without asking. A missing
    /// one is fatal in non-interactive mode and re-prompted otherwise.
    pub fn collect_config(&mut self, flags: &ConfigFlags) -> Result<RunConfig> {
        let mut folders = BTreeMap::new();
        for category in Category::ALL {
            let folder = match flags.folders.get(&category) {
                Some(path) if path.exists() => Some(path.clone()),
                Some(path) if flags.non_interactive => {
                    bail!("{} folder path does not exist: {}", category, path.display())
                }
                Some(path) => {
                    warn!("{} folder path does not exist: {}", category, path.display());
                    self.ask_folder(category)?
                }
                None if flags.non_interactive => None,
                None => self.ask_folder(category)?,
            };

            if let Some(folder) = folder {
                folders.insert(category, folder);
            }
        }

        // Fail on missing folders before asking for a file name
        if folders.is_empty() {
            return Err(ConfigError::NoFolders.into());
        }

        let output_name = match &flags.output_name {
            Some(name) => name.clone(),
            None if flags.non_interactive => String::new(),
            None => self.ask_output_name()?,
        };

        Ok(RunConfig::new(folders, &output_name, flags.json_path.clone())?)
    }

    /// Ask for a category root until an existing path or an empty answer is given
    pub fn ask_folder(&mut self, category: Category) -> Result<Option<PathBuf>> {
        loop {
            let Some(answer) = self.ask(&format!("Input your {category} folder path: "))? else {
                return Ok(None);
            };
            if answer.is_empty() {
                return Ok(None);
            }

            let path = PathBuf::from(answer);
            if path.exists() {
                return Ok(Some(path));
            }
            writeln!(self.output, "Error: Folder path does not exist.")?;
        }
    }

    /// Ask for the output base name; empty when nothing was entered
    pub fn ask_output_name(&mut self) -> Result<String> {
        let answer = self.ask("Enter the name of the CSV file to save the output (without extension): ")?;
        Ok(answer.unwrap_or_default())
    }

    /// Print a question and read one trimmed line; `None` at end of input
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reprompts_on_missing_folder() {
        let dir = tempfile::tempdir().unwrap();
        let input = format!("/definitely/not/here\n{}\n", dir.path().display());
        let mut output = Vec::new();

        let answer = Prompter::new(Cursor::new(input), &mut output)
            .ask_folder(Category::Visual)
            .unwrap();

        assert_eq!(answer, Some(dir.path().to_path_buf()));
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Input your VISUAL folder path: ").count(), 2);
        assert!(shown.contains("Error: Folder path does not exist."));
    }

    #[test]
    fn test_empty_answer_skips_category() {
        let mut output = Vec::new();
        let answer = Prompter::new(Cursor::new("  \n"), &mut output)
            .ask_folder(Category::Thermal)
            .unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn test_end_of_input_skips_category() {
        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new(""), &mut output);
        assert_eq!(prompter.ask_folder(Category::Thermal).unwrap(), None);
        assert_eq!(prompter.ask_output_name().unwrap(), "");
    }

    #[test]
    fn test_non_interactive_missing_flag_path_fails() {
        let flags = ConfigFlags {
            folders: BTreeMap::from([(Category::Visual, PathBuf::from("/definitely/not/here"))]),
            output_name: Some("daily".to_string()),
            non_interactive: true,
            ..Default::default()
        };
        let mut output = Vec::new();

        let err = Prompter::new(Cursor::new(""), &mut output)
            .collect_config(&flags)
            .unwrap_err();

        assert!(err.to_string().contains("VISUAL folder path does not exist"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_existing_flag_paths_skip_prompts() {
        let dir = tempfile::tempdir().unwrap();
        let flags = ConfigFlags {
            folders: BTreeMap::from([(Category::Thermal, dir.path().to_path_buf())]),
            output_name: Some("daily".to_string()),
            json_path: Some(PathBuf::from("daily.json")),
            non_interactive: true,
        };
        let mut output = Vec::new();

        let config = Prompter::new(Cursor::new(""), &mut output)
            .collect_config(&flags)
            .unwrap();

        assert!(output.is_empty());
        assert_eq!(config.folders, BTreeMap::from([(Category::Thermal, dir.path().to_path_buf())]));
        assert_eq!(config.output_name, "daily");
        assert_eq!(config.json_path, Some(PathBuf::from("daily.json")));
    }

    #[test]
    fn test_missing_flag_path_is_prompted_for() {
        let dir = tempfile::tempdir().unwrap();
        let flags = ConfigFlags {
            folders: BTreeMap::from([(Category::Visual, PathBuf::from("/definitely/not/here"))]),
            ..Default::default()
        };
        // VISUAL answer, THERMAL skipped, then the output name
        let input = format!("{}\n\nday_03\n", dir.path().display());
        let mut output = Vec::new();

        let config = Prompter::new(Cursor::new(input), &mut output)
            .collect_config(&flags)
            .unwrap();

        assert_eq!(config.folders, BTreeMap::from([(Category::Visual, dir.path().to_path_buf())]));
        assert_eq!(config.output_name, "day_03");
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown.matches("Input your VISUAL folder path: ").count(), 1);
        assert_eq!(shown.matches("Input your THERMAL folder path: ").count(), 1);
    }

    #[test]
    fn test_no_folders_fails_before_output_prompt() {
        let mut output = Vec::new();
        let err = Prompter::new(Cursor::new("\n\n"), &mut output)
            .collect_config(&ConfigFlags::default())
            .unwrap_err();

        assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::NoFolders));
        let shown = String::from_utf8(output).unwrap();
        assert!(!shown.contains("CSV file"));
    }

    #[test]
    fn test_output_name_trimmed() {
        let mut output = Vec::new();
        let name = Prompter::new(Cursor::new("  march_18 \n"), &mut output)
            .ask_output_name()
            .unwrap();
        assert_eq!(name, "march_18");
    }
}
