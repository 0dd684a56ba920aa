// Copyright 2025 DataOps Kube Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Interactive yes/no confirmation for destructive commands.

use std::io::{self, BufRead, Write};

const PROMPT: &str = "Are you sure that you want to proceed? (yes/no): ";
const INVALID_ANSWER: &str = "Invalid value. Must enter 'yes' or 'no'.";

/// Print `warning`, then ask until the user answers "yes" or "no"
/// (case-insensitive). Returns `false` on end of input.
pub fn confirm_destructive_action(
    warning: &str,
    input: impl BufRead,
    mut output: impl Write,
) -> io::Result<bool> {
    writeln!(output, "{}", warning)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;
        let answer = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };
        match answer.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "{}", INVALID_ANSWER)?,
        }
    }
}

/// Stdin/stdout convenience wrapper.
pub fn confirm_from_stdin(warning: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm_destructive_action(warning, stdin.lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> bool {
        let mut out = Vec::new();
        confirm_destructive_action("Warning: test.", Cursor::new(input), &mut out).unwrap()
    }

    #[test]
    fn test_yes_confirms() {
        assert!(run("yes\n"));
        assert!(run("YES\n"));
        assert!(run("  Yes  \n"));
    }

    #[test]
    fn test_no_aborts() {
        assert!(!run("no\n"));
        assert!(!run("No\n"));
    }

    #[test]
    fn test_reprompts_on_invalid_answer() {
        assert!(run("maybe\ny\nyes\n"));
        assert!(!run("1\nno\n"));
    }

    #[test]
    fn test_end_of_input_aborts() {
        assert!(!run(""));
    }
}
