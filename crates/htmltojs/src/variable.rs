//! Short identifier generation for emitted nodes.

const FIRST: u8 = b'a';
const LAST: u8 = b'z';

/// Generates `a, b, ..., z, aa, ab, ...` behind a fixed prefix.
///
/// The prefix keeps generated names away from JavaScript reserved words
/// (`do`, `if`, `in`, ...).
#[derive(Debug, Clone)]
pub struct VariableNames {
    prefix: String,
    digits: Vec<u8>,
}

impl VariableNames {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            digits: Vec::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn set_prefix(&mut self, prefix: &str) {
        self.prefix = prefix.to_string();
    }

    /// Return a fresh name and advance the sequence.
    pub fn generate(&mut self) -> String {
        self.increment();
        self.render()
    }

    /// The most recently generated name, if any.
    pub fn current(&self) -> Option<String> {
        if self.digits.is_empty() {
            None
        } else {
            Some(self.render())
        }
    }

    /// Restart the sequence at `a`. The prefix is kept.
    pub fn reset(&mut self) {
        self.digits.clear();
    }

    fn increment(&mut self) {
        for i in (0..self.digits.len()).rev() {
            if self.digits[i] < LAST {
                self.digits[i] += 1;
                return;
            }
            self.digits[i] = FIRST;
        }
        // carried past the leftmost digit (or there were none yet)
        self.digits.insert(0, FIRST);
    }

    fn render(&self) -> String {
        let mut name = String::with_capacity(self.prefix.len() + self.digits.len());
        name.push_str(&self.prefix);
        name.extend(self.digits.iter().map(|&d| d as char));
        name
    }
}

impl Default for VariableNames {
    fn default() -> Self {
        Self::new("_")
    }
}

impl Iterator for VariableNames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.generate())
    }
}
