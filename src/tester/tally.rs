//! Pass/fail bookkeeping for the tally tester

/// One recorded check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRecord {
    pub name: String,
    pub success: bool,
    pub details: String,
}

impl CheckRecord {
    /// The line printed for this check
    pub fn line(&self) -> String {
        if self.success {
            format!("✅ {}", self.name)
        } else {
            format!("❌ {} - {}", self.name, self.details)
        }
    }
}

/// Counters for checks run and passed, plus the record of each check.
///
/// `run` always equals the number of `record` calls.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    run: usize,
    passed: usize,
    records: Vec<CheckRecord>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one check and return its success flag
    pub fn record(&mut self, name: &str, success: bool, details: &str) -> &CheckRecord {
        self.run += 1;
        if success {
            self.passed += 1;
        }
        self.records.push(CheckRecord {
            name: name.to_string(),
            success,
            details: details.to_string(),
        });
        // just pushed
        &self.records[self.records.len() - 1]
    }

    pub fn run(&self) -> usize {
        self.run
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.run - self.passed
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.run
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    /// Process exit code: 0 when every check passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() { 0 } else { 1 }
    }

    /// Closing lines printed after the last check
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            String::new(),
            "=".repeat(50),
            format!("📊 Test Results: {}/{} passed", self.passed, self.run),
        ];
        if self.all_passed() {
            lines.push("🎉 All tests passed!".to_string());
        } else {
            lines.push(format!("⚠️  {} tests failed", self.failed()));
        }
        lines
    }
}
