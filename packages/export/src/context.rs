//! Shared output buffer for the page generators.

pub struct Context {
    pretty: bool,
    indent: String,
    depth: usize,
    buffer: String,
}

impl Context {
    pub fn new(pretty: bool) -> Self {
        Self {
            pretty,
            indent: "  ".to_string(),
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn add_line(&mut self, text: &str) {
        if self.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.pretty {
            self.add("\n");
        }
    }

    pub fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}

/// Escape text for element content and attribute values
pub fn escape_markup(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
