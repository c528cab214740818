//! Rendering a list for display.

use core::fmt::{self, Write};

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use super::list::List;
use super::traits::Destructor;

const RULE: &str = "========================================";
const DIVIDER: &str = "- - - - - - - - - - - - - - - - - - - - ";

impl<T, D> List<T, D>
where
    D: Destructor<T>,
{
    /// Stringify every element, head to tail.
    ///
    /// `stringify` is called once per element and must return a fresh string.
    pub fn render<F>(&self, stringify: F) -> Vec<String>
    where
        F: FnMut(&T) -> String,
    {
        self.iter().map(stringify).collect()
    }

    /// Write the list as an indexed table:
    ///
    /// ```text
    /// List of type 'i32' and of size '2'
    /// ========================================
    /// (Index): (Data)
    /// - - - - - - - - - - - - - - - - - - - -
    /// 0: 4
    /// 1: 7
    /// ========================================
    /// ```
    pub fn write_table<W, F>(&self, out: &mut W, mut stringify: F) -> fmt::Result
    where
        W: Write + ?Sized,
        F: FnMut(&T) -> String,
    {
        writeln!(
            out,
            "List of type '{}' and of size '{}'",
            self.element_type().name(),
            self.len()
        )?;
        writeln!(out, "{RULE}")?;
        writeln!(out, "(Index): (Data)")?;
        writeln!(out, "{DIVIDER}")?;
        for (index, element) in self.iter().enumerate() {
            writeln!(out, "{index}: {}", stringify(element))?;
        }
        writeln!(out, "{RULE}")
    }

    /// Render [`write_table`](Self::write_table) into a new string.
    pub fn table<F>(&self, stringify: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = self.write_table(&mut out, stringify);
        out
    }
}

impl<T, D> fmt::Display for List<T, D>
where
    T: fmt::Display,
    D: Destructor<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_table(f, |element| element.to_string())
    }
}
