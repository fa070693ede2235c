/*!
A line-oriented writer for emitted Ruby source. The writer tracks an indent depth and a stack of
pending block close strings; `open_block` and `close_block` must pair on every exit path, and
[`finish`](struct.RubyWriter.html#method.finish) fails with `UnbalancedBlock` otherwise. The
destructor asserts, in debug builds, that a writer dropped without `finish` left no block open.
One writer produces the contents of exactly one manifest file.

Templates passed to the `*_template` methods may contain `$name` placeholders, substituted from
the named arguments bound at the call site. A placeholder with no bound argument is passed
through verbatim, so Ruby globals such as `$stdout` survive unharmed.
*/

use garnet_core::error::{ErrorKind, Result};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// An indent-tracking text accumulator for one emitted Ruby file.
///
#[derive(Debug)]
pub struct RubyWriter {
    buffer: String,
    indent: usize,
    at_line_start: bool,
    open_blocks: Vec<String>,
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

const INDENT: &str = "  ";

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Default for RubyWriter {
    fn default() -> Self {
        Self {
            buffer: Default::default(),
            indent: 0,
            at_line_start: true,
            open_blocks: Default::default(),
        }
    }
}

impl RubyWriter {
    /// Construct a new, empty, writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a single line at the current indent depth; an empty string writes a bare newline.
    pub fn write(&mut self, line: &str) {
        if line.is_empty() {
            self.buffer.push('\n');
            self.at_line_start = true;
            return;
        }
        self.write_inline(line);
        self.buffer.push('\n');
        self.at_line_start = true;
    }

    /// Write a line, substituting `$name` placeholders from `args`.
    pub fn write_template(&mut self, template: &str, args: &[(&str, &str)]) {
        let line = substitute(template, args);
        self.write(&line);
    }

    /// Write text without a trailing newline; indentation is applied at line start only.
    pub fn write_inline(&mut self, text: &str) {
        if self.at_line_start && !text.is_empty() {
            for _ in 0..self.indent {
                self.buffer.push_str(INDENT);
            }
            self.at_line_start = false;
        }
        self.buffer.push_str(text);
    }

    /// Write a blank line.
    pub fn blank(&mut self) {
        self.write("");
    }

    /// Write each line of `text` as a `#` comment at the current indent depth.
    pub fn doc_comment(&mut self, text: &str) {
        for line in text.lines() {
            if line.is_empty() {
                self.write("#");
            } else {
                self.write(&format!("# {}", line));
            }
        }
    }

    // --------------------------------------------------------------------------------------------

    /// Increase the indent depth by one.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease the indent depth by one.
    pub fn outdent(&mut self) {
        debug_assert!(self.indent > 0);
        self.indent = self.indent.saturating_sub(1);
    }

    ///
    /// Write `prefix` as a line, push `close` onto the pending block stack, and indent. Every
    /// open block must be closed with [`close_block`](struct.RubyWriter.html#method.close_block)
    /// before the writer is finished.
    ///
    pub fn open_block(&mut self, prefix: &str, close: &str) {
        self.write(prefix);
        self.open_blocks.push(close.to_string());
        self.indent();
    }

    /// As [`open_block`](struct.RubyWriter.html#method.open_block), with `$name` substitution.
    pub fn open_block_template(&mut self, template: &str, args: &[(&str, &str)], close: &str) {
        let line = substitute(template, args);
        self.open_block(&line, close);
    }

    /// Close the innermost open block, writing its pending close string.
    pub fn close_block(&mut self) -> Result<()> {
        match self.open_blocks.pop() {
            Some(close) => {
                self.outdent();
                self.write(&close);
                Ok(())
            }
            None => Err(ErrorKind::UnbalancedBlock("no block is open".to_string()).into()),
        }
    }

    /// Close all remaining open blocks, innermost first.
    pub fn close_all(&mut self) -> Result<()> {
        while !self.open_blocks.is_empty() {
            self.close_block()?;
        }
        Ok(())
    }

    // --------------------------------------------------------------------------------------------

    ///
    /// The call-out hook; invoke `f` with this writer so that another component can compose
    /// content in place.
    ///
    pub fn inject<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        f(self)
    }

    /// The number of currently open blocks.
    pub fn open_block_count(&self) -> usize {
        self.open_blocks.len()
    }

    ///
    /// Consume the writer and return the accumulated text; fails with `UnbalancedBlock` if any
    /// block remains open. The imbalance is reported here rather than by the destructor.
    ///
    pub fn finish(mut self) -> Result<String> {
        let open_blocks = std::mem::take(&mut self.open_blocks);
        if !open_blocks.is_empty() {
            return Err(ErrorKind::UnbalancedBlock(format!(
                "{} block(s) still open",
                open_blocks.len()
            ))
            .into());
        }
        Ok(std::mem::take(&mut self.buffer))
    }
}

impl Drop for RubyWriter {
    /// A writer dropped without [`finish`](struct.RubyWriter.html#method.finish) must have
    /// closed every block it opened; an imbalance here is a generator bug.
    fn drop(&mut self) {
        debug_assert!(
            self.open_blocks.is_empty(),
            "writer dropped with {} open block(s)",
            self.open_blocks.len()
        );
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut result = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }
        let mut name = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_alphanumeric() || next == '_' {
                name.push(next);
                let _ = chars.next();
            } else {
                break;
            }
        }
        match args.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => result.push_str(value),
            None => {
                result.push('$');
                result.push_str(&name);
            }
        }
    }
    result
}
