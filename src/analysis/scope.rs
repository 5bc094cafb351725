//! Line-oriented scope trackers.
//!
//! Both trackers answer two questions for the line being scanned: how many
//! loop scopes enclose it, and whether it sits inside the body of a named
//! function. They are heuristics: unmatched braces or odd indentation skew
//! the answers but never fail.

/// Columns a tab counts for when measuring indentation.
pub const TAB_WIDTH: usize = 2;

/// The function whose body is currently being scanned.
#[derive(Debug, Clone)]
struct FunctionMarker<K> {
    name: String,
    /// Indent or brace depth recorded at the header.
    level: K,
}

/// Scope tracker for indentation-delimited source.
#[derive(Debug, Default)]
pub struct IndentScopes {
    loops: Vec<usize>,
    function: Option<FunctionMarker<usize>>,
    on_header: bool,
}

impl IndentScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leading whitespace width of a raw line, tabs expanded.
    pub fn indent_of(raw_line: &str) -> usize {
        raw_line
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
            .sum()
    }

    /// Close every scope the next line at `indent` falls outside of.
    ///
    /// A loop ends at the first sibling or shallower line; a function ends at
    /// the first strictly shallower line.
    pub fn begin_line(&mut self, indent: usize) {
        while self.loops.last().is_some_and(|&top| indent <= top) {
            self.loops.pop();
        }
        if self.function.as_ref().is_some_and(|f| indent < f.level) {
            self.function = None;
        }
    }

    /// Mark the current line as a function header at `indent`.
    pub fn enter_function(&mut self, name: &str, indent: usize) {
        self.function = Some(FunctionMarker {
            name: name.to_string(),
            level: indent,
        });
        self.on_header = true;
    }

    /// Push a loop scope and return the nesting depth it opens.
    pub fn enter_loop(&mut self, indent: usize) -> usize {
        self.loops.push(indent);
        self.loops.len()
    }

    /// True when the current line is in `name`'s body, header excluded.
    pub fn in_body_of(&self, name: &str) -> bool {
        !self.on_header && self.function.as_ref().is_some_and(|f| f.name == name)
    }

    /// Reset the header flag once the line is done.
    pub fn end_line(&mut self) {
        self.on_header = false;
    }

    /// Number of loop scopes enclosing the current line.
    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    /// Function whose body the scan is in, if any.
    pub fn current_function(&self) -> Option<&str> {
        self.function.as_ref().map(|f| f.name.as_str())
    }
}

/// Scope tracker for brace-delimited source.
#[derive(Debug, Default)]
pub struct BraceScopes {
    depth: isize,
    loops: Vec<isize>,
    function: Option<FunctionMarker<isize>>,
    just_declared: bool,
}

impl BraceScopes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the braces on `line`, then close every scope whose recorded
    /// depth is now above the running brace depth.
    pub fn begin_line(&mut self, line: &str) {
        for c in line.chars() {
            match c {
                '{' => self.depth += 1,
                '}' => self.depth -= 1,
                _ => {}
            }
        }

        while self.loops.last().is_some_and(|&top| self.depth < top) {
            self.loops.pop();
        }
        if self.function.as_ref().is_some_and(|f| self.depth < f.level) {
            self.function = None;
        }
    }

    /// Mark the current line as a method header.
    pub fn enter_function(&mut self, name: &str) {
        self.function = Some(FunctionMarker {
            name: name.to_string(),
            level: self.depth,
        });
        self.just_declared = true;
    }

    /// Push a loop scope at the current depth and return its nesting depth.
    pub fn enter_loop(&mut self) -> usize {
        self.loops.push(self.depth);
        self.loops.len()
    }

    /// True when the current line is in `name`'s body, header excluded.
    pub fn in_body_of(&self, name: &str) -> bool {
        !self.just_declared && self.function.as_ref().is_some_and(|f| f.name == name)
    }

    /// Reset the one-line declaration flag.
    pub fn end_line(&mut self) {
        self.just_declared = false;
    }

    /// Running brace depth after the current line. Negative on stray `}`.
    pub fn brace_depth(&self) -> isize {
        self.depth
    }

    /// Number of loop scopes enclosing the current line.
    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    /// Method whose body the scan is in, if any.
    pub fn current_function(&self) -> Option<&str> {
        self.function.as_ref().map(|f| f.name.as_str())
    }
}
