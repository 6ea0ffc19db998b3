//! Contains wrappers for loading LTSs and formulae from plain-text files (§4.11).

use crate::error::Error;
use crate::lts::{LabeledState, Lts, Transition};
use std::fs::read_to_string;
use std::path::Path;

/// Read the formulae from the specified file. Ignore empty lines and lines starting with `#`
/// (comments). The syntax of these formulae is checked later during parsing.
pub fn load_formulae(formulae_path: &str) -> Result<Vec<String>, Error> {
    let contents =
        read_to_string(formulae_path).map_err(|e| Error::io(formulae_path, e))?;

    let mut formulae = Vec::new();
    for line in contents.lines() {
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            formulae.push(trimmed.to_string());
        }
    }
    Ok(formulae)
}

/// Load an LTS from its plain-text encoding: one state per line as `state: prop, prop, ...`
/// followed by one transition per line as `source, action -> succ, succ, ...`. Blank lines and
/// `#`-prefixed comments are ignored. The two sections are told apart by the presence of `->`.
pub fn load_lts(lts_path: &str) -> Result<Lts, Error> {
    let contents = read_to_string(lts_path).map_err(|e| Error::io(lts_path, e))?;

    let mut states = Vec::new();
    let mut transitions = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((head, tail)) = trimmed.split_once("->") {
            transitions.push(parse_transition_line(head, tail, line_no)?);
        } else {
            states.push(parse_state_line(trimmed, line_no)?);
        }
    }

    Lts::new(states, transitions)
}

fn parse_state_line(line: &str, line_no: usize) -> Result<LabeledState, Error> {
    let (id_part, labels_part) = line.split_once(':').ok_or_else(|| {
        Error::MalformedLts(format!("line {}: expected `state: props`, found `{line}`", line_no + 1))
    })?;
    let id = parse_state_id(id_part, line_no)?;
    let labels = labels_part
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    Ok(LabeledState { id, labels })
}

fn parse_transition_line(head: &str, tail: &str, line_no: usize) -> Result<Transition, Error> {
    let (source_part, action_part) = head.split_once(',').ok_or_else(|| {
        Error::MalformedLts(format!(
            "line {}: expected `source, action -> successors`, found `{head} -> {tail}`",
            line_no + 1
        ))
    })?;
    let source = parse_state_id(source_part, line_no)?;
    let action = action_part.trim().to_string();
    let successors = tail
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_state_id(s, line_no))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transition {
        source,
        action,
        successors,
    })
}

fn parse_state_id(raw: &str, line_no: usize) -> Result<u32, Error> {
    raw.trim().parse::<u32>().map_err(|_| {
        Error::MalformedLts(format!(
            "line {}: `{}` is not a valid state id",
            line_no + 1,
            raw.trim()
        ))
    })
}

/// Check that `path` exists and is a regular file before attempting to load it, matching the
/// up-front validation the CLI driver performs (§4.14).
pub fn is_valid_file(path: &str) -> bool {
    Path::new(path).is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write as _;
    use std::path::PathBuf;

    /// A scratch file removed on drop, used instead of pulling in a tempfile dependency just
    /// for these tests.
    struct TempPath(PathBuf);

    impl TempPath {
        fn with_contents(contents: &str) -> TempPath {
            let path = std::env::temp_dir().join(format!(
                "alpha-ctl-planner-test-{}-{:x}.txt",
                std::process::id(),
                contents.len() as u64 * 2654435761
            ));
            let mut file = File::create(&path).unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            TempPath(path)
        }

        fn as_str(&self) -> &str {
            self.0.to_str().unwrap()
        }
    }

    impl Drop for TempPath {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn write_temp(contents: &str) -> TempPath {
        TempPath::with_contents(contents)
    }

    #[test]
    fn load_formulae_skips_blank_and_comment_lines() {
        let path = write_temp("# a comment\nag(ef(p))\n\nef(q)\n");
        let formulae = load_formulae(path.as_str()).unwrap();
        assert_eq!(formulae, vec!["ag(ef(p))".to_string(), "ef(q)".to_string()]);
    }

    #[test]
    fn load_lts_parses_states_and_transitions() {
        let path = write_temp("0: p, q\n1: p\n0, a -> 1\n");
        let lts = load_lts(path.as_str()).unwrap();
        assert_eq!(lts.states().len(), 2);
        assert_eq!(lts.transitions().len(), 1);
    }

    #[test]
    fn load_lts_rejects_dangling_reference() {
        let path = write_temp("0: p\n0, a -> 1\n");
        assert!(matches!(load_lts(path.as_str()), Err(Error::MalformedLts(_))));
    }

    #[test]
    fn load_lts_rejects_duplicate_state_action() {
        let path = write_temp("0: p\n1: q\n0, a -> 1\n0, a -> 0\n");
        assert!(matches!(load_lts(path.as_str()), Err(Error::MalformedLts(_))));
    }

    #[test]
    fn load_formulae_reports_io_errors() {
        assert!(matches!(
            load_formulae("/nonexistent/path/to/formulae.txt"),
            Err(Error::Io { .. })
        ));
    }
}
