use std::path::{Path, PathBuf};

/// Read request size used when `--buffer-size` is not given.
pub const DEFAULT_BUFFER_BYTES: usize = 8192;

const STDIN_PLACEHOLDER: &str = "-";

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn label(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

/// No inputs means standard input; `-` may also name it explicitly.
pub fn sources(inputs: &[PathBuf]) -> Vec<Source> {
    if inputs.is_empty() {
        return vec![Source::Stdin];
    }
    inputs
        .iter()
        .map(|path| {
            if path == Path::new(STDIN_PLACEHOLDER) {
                Source::Stdin
            } else {
                Source::File(path.clone())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_inputs_read_stdin() {
        assert_eq!(sources(&[]), vec![Source::Stdin]);
    }

    #[test]
    fn dash_is_stdin_among_files() {
        let inputs = [PathBuf::from("a.txt"), PathBuf::from("-")];
        assert_eq!(
            sources(&inputs),
            vec![Source::File(PathBuf::from("a.txt")), Source::Stdin]
        );
    }
}
