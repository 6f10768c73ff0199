/// Appends XML one line at a time, indenting each line by the depth the
/// caller passes in.
#[derive(Debug)]
pub struct XmlWriter {
    buffer:             String,
    indent:             String,
    first_line_written: bool,
}

impl XmlWriter {
    pub fn new(indent_width: usize) -> Self {
        XmlWriter {
            buffer:             String::new(),
            indent:             " ".repeat(indent_width),
            first_line_written: false,
        }
    }

    pub fn open_tag(&mut self, depth: usize, name: &str) {
        self.write_line(depth, &format!("<{}>", name));
    }

    pub fn close_tag(&mut self, depth: usize, name: &str) {
        self.write_line(depth, &format!("</{}>", name));
    }

    /// Writes `<name>content</name>` on a single line. Content is written as-is.
    pub fn leaf(&mut self, depth: usize, name: &str, content: &str) {
        self.write_line(depth, &format!("<{0}>{1}</{0}>", name, content));
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    // No line break before the first line of the document.
    fn write_line(&mut self, depth: usize, line: &str) {
        if self.first_line_written {
            self.buffer.push('\n');
            for _ in 0..depth {
                self.buffer.push_str(&self.indent);
            }
        } else {
            self.first_line_written = true;
        }
        self.buffer.push_str(line);
    }
}
