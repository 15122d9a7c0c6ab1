/// Minimal `.context` document helpers.
///
/// Every text payload starts with `[CONTENT]`; `A:` lines carry the answer, `N:` lines carry
/// notes and `M:` lines carry machine-readable hints.
pub(crate) struct ContextDocBuilder {
    out: String,
}

impl ContextDocBuilder {
    const QUOTE_PREFIX: &'static str = " ";

    #[must_use]
    pub(crate) fn new() -> Self {
        let mut out = String::new();
        out.push_str("[CONTENT]\n");
        Self { out }
    }

    #[must_use]
    pub(crate) fn finish(self) -> String {
        self.out
    }

    pub(crate) fn push_line(&mut self, line: &str) {
        if Self::needs_quoting(line) {
            self.out.push_str(Self::QUOTE_PREFIX);
        }
        self.out.push_str(line);
        self.out.push('\n');
    }

    pub(crate) fn push_answer(&mut self, text: &str) {
        self.push_marker("A:", text);
    }

    pub(crate) fn push_note(&mut self, text: &str) {
        self.push_marker("N:", text);
    }

    pub(crate) fn push_meta(&mut self, text: &str) {
        self.push_marker("M:", text);
    }

    fn push_marker(&mut self, marker: &str, text: &str) {
        self.out.push_str(marker);
        self.out.push(' ');
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn needs_quoting(line: &str) -> bool {
        let trimmed = line.trim_start();
        trimmed.starts_with("[CONTENT]")
            || trimmed.starts_with("A:")
            || trimmed.starts_with("N:")
            || trimmed.starts_with("M:")
    }
}
