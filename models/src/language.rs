//! Languages accepted by the paste service.

use crate::ModelError;

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

closed_set! {
    /// A paste language. Parsing ignores case and yields the canonical spelling.
    pub enum Language {
        JavaScript => "JavaScript",
        Json => "JSON",
        Html => "HTML",
        Css => "CSS",
        Markdown => "Markdown",
        PlainText => "PlainText",
        Python => "Python",
        Java => "Java",
        Cpp => "C++",
        C => "C",
        CSharp => "C#",
        TypeScript => "TypeScript",
        Php => "PHP",
        Ruby => "Ruby",
        Go => "Go",
        Rust => "Rust",
        Swift => "Swift",
        Kotlin => "Kotlin",
        Dart => "Dart",
        Scala => "Scala",
        R => "R",
        Matlab => "MATLAB",
        Sql => "SQL",
        Shell => "Shell",
        PowerShell => "PowerShell",
        Bash => "Bash",
        Perl => "Perl",
        Lua => "Lua",
        Haskell => "Haskell",
        Erlang => "Erlang",
        Elixir => "Elixir",
        FSharp => "F#",
        OCaml => "OCaml",
        Clojure => "Clojure",
        Lisp => "Lisp",
        Scheme => "Scheme",
        Prolog => "Prolog",
        Vhdl => "VHDL",
        Verilog => "Verilog",
        Assembly => "Assembly",
        Fortran => "Fortran",
        Cobol => "COBOL",
        Ada => "Ada",
        Pascal => "Pascal",
        Delphi => "Delphi",
        VbNet => "VB.NET",
        Vba => "VBA",
        ActionScript => "ActionScript",
        CoffeeScript => "CoffeeScript",
        LiveScript => "LiveScript",
        PureScript => "PureScript",
        Elm => "Elm",
        ReasonMl => "ReasonML",
        Crystal => "Crystal",
        Nim => "Nim",
        Zig => "Zig",
        V => "V",
        Dlang => "Dlang",
    }
}

// Keyed by lowercase name.
static BY_FOLDED_NAME: Lazy<HashMap<String, Language>> = Lazy::new(|| {
    Language::ALL
        .iter()
        .map(|language| (language.as_str().to_lowercase(), *language))
        .collect()
});

impl Language {
    /// Owned copy of every language name.
    pub fn names() -> Vec<&'static str> {
        Language::ALL.iter().map(Language::as_str).collect()
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::PlainText
    }
}

impl FromStr for Language {
    type Err = ModelError;

    #[track_caller]
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        BY_FOLDED_NAME
            .get(&value.to_lowercase())
            .copied()
            .ok_or_else(|| ModelError::unknown_language(value))
    }
}
