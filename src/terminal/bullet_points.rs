use std::fmt::Display;

const BULLET: &str = "•";
const INDENT: &str = "  ";

/// Prints the conversion summary as a tree of bullet points.
///
/// Plain lines are never indented, items are indented by their nesting depth.
pub struct BulletPointPrinter<W: LineWriter + Clone> {
    writer: W,
    depth: usize,
}

impl<W: LineWriter + Clone> BulletPointPrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, depth: 0 }
    }

    pub fn print_line(&self, message: impl Display) {
        self.writer.write_line(&message.to_string());
    }

    pub fn print_item(&self, message: impl Display) {
        let line = format!("{}{BULLET} {message}", INDENT.repeat(self.depth));
        self.writer.write_line(&line);
    }

    /// A printer for items one level below this one, sharing the same output.
    pub fn indent(&self) -> Self {
        Self {
            writer: self.writer.clone(),
            depth: self.depth + 1,
        }
    }
}

impl BulletPointPrinter<StdoutLineWriter> {
    pub fn new_stdout() -> Self {
        Self::new(StdoutLineWriter)
    }
}

pub trait LineWriter {
    fn write_line(&self, line: &str);
}

#[derive(Clone, Copy, Debug)]
pub struct StdoutLineWriter;

impl LineWriter for StdoutLineWriter {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Keeps written lines in memory
#[cfg(test)]
#[derive(Clone, Default)]
pub struct RecordingLineWriter {
    lines: std::rc::Rc<std::cell::RefCell<Vec<String>>>,
}

#[cfg(test)]
impl RecordingLineWriter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

#[cfg(test)]
impl LineWriter for RecordingLineWriter {
    fn write_line(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
