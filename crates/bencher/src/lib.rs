/// A request body fed to the decoder benchmarks
#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    outcome: Outcome,
    file: TestFile,
}

impl TestCase {
    pub fn new(name: &'static str, outcome: Outcome, file: TestFile) -> Self {
        Self { name, outcome, file }
    }

    pub fn accepted(name: &'static str, file: TestFile) -> Self {
        Self::new(name, Outcome::Accepted, file)
    }

    pub fn rejected(name: &'static str, file: TestFile) -> Self {
        Self::new(name, Outcome::Rejected, file)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn file(&self) -> &TestFile {
        &self.file
    }

    pub fn file_name(&self) -> &'static str {
        self.file().file_name
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestFile {
    file_name: &'static str,
    content: &'static str,
}

impl TestFile {
    pub const fn new(file_name: &'static str, content: &'static str) -> Self {
        Self { file_name, content }
    }

    pub fn content(&self) -> &'static str {
        self.content
    }

    pub fn file_name(&self) -> &'static str {
        self.file_name
    }
}

/// Whether the decoder is expected to accept the body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    Rejected,
}
