use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::OnceLock;

/// Default threshold for the long-function detector (immediate body statements).
pub const DEFAULT_MAX_FUNCTION_STATEMENTS: usize = 20;

/// Maximum physical line width tolerated by the truncation stage.
pub const MAX_LINE_WIDTH: usize = 100;

/// Marker comment appended to lines cut by the truncation stage.
pub const TRUNCATION_MARKER: &str = "  # truncated";

/// Placeholder statement inserted as the body of an otherwise empty block.
pub const PLACEHOLDER_BODY: &str = "pass";

/// Zero-equivalent default assigned to stubbed undefined names.
pub const STUB_VALUE: &str = "0";

/// Indentation unit used for inserted placeholder bodies and tab expansion.
pub const INDENT_UNIT: &str = "    ";

/// Default command for the external style checker.
pub const DEFAULT_STYLE_COMMAND: &str = "flake8";

/// Default command for the external formatter.
pub const DEFAULT_FORMATTER_COMMAND: &str = "black";

/// Regex matching a compound-statement opener that is missing its colon:
/// the trimmed line starts with a block keyword followed by a non-empty clause.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_opener_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^(?:if|elif|for|while|def|class)\b\s+\S")
            .expect("Invalid opener regex pattern")
    })
}

/// Regex matching a well-formed block opener line (trimmed), i.e. a block
/// keyword line that ends with its colon and therefore requires a body.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_block_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^(?:if|elif|for|while|def|class)\b.*:$")
            .expect("Invalid block header regex pattern")
    })
}

/// Regex matching a `return` statement with a single bare identifier operand.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_bare_return_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^return\s+([A-Za-z_][A-Za-z0-9_]*)\s*$")
            .expect("Invalid bare return regex pattern")
    })
}

/// Regex matching one line of style-tool output: `<line>: <message>`.
///
/// # Panics
///
/// Panics if the regex pattern is invalid.
pub fn get_style_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^(\d+):\s*(.*)$").expect("Invalid style line regex pattern"))
}

/// The default set of Python builtin identifiers.
///
/// Names in this set are never reported as undefined. The engine treats the
/// builtin set as an injected read-only input (`EngineConfig::builtins`);
/// this is merely the default value for it.
pub fn default_builtins() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| {
        [
            // Constants
            "True", "False", "None", "NotImplemented", "Ellipsis", "__debug__", "__name__",
            "__file__", "__doc__", "__builtins__", "__spec__", "__package__",
            // Types and constructors
            "bool", "bytearray", "bytes", "complex", "dict", "float", "frozenset", "int", "list",
            "object", "set", "str", "tuple", "type", "memoryview", "slice", "range", "property",
            "classmethod", "staticmethod", "super",
            // Functions
            "abs", "aiter", "anext", "all", "any", "ascii", "bin", "breakpoint", "callable",
            "chr", "compile", "delattr", "dir", "divmod", "enumerate", "eval", "exec", "filter",
            "format", "getattr", "globals", "hasattr", "hash", "help", "hex", "id", "input",
            "isinstance", "issubclass", "iter", "len", "locals", "map", "max", "min", "next",
            "oct", "open", "ord", "pow", "print", "repr", "reversed", "round", "setattr",
            "sorted", "sum", "vars", "zip", "__import__",
            // Exceptions
            "BaseException", "Exception", "ArithmeticError", "AssertionError", "AttributeError",
            "BlockingIOError", "BrokenPipeError", "BufferError", "BytesWarning",
            "ChildProcessError", "ConnectionError", "ConnectionAbortedError",
            "ConnectionRefusedError", "ConnectionResetError", "DeprecationWarning", "EOFError",
            "EnvironmentError", "FileExistsError", "FileNotFoundError", "FloatingPointError",
            "FutureWarning", "GeneratorExit", "IOError", "ImportError", "ImportWarning",
            "IndentationError", "IndexError", "InterruptedError", "IsADirectoryError", "KeyError",
            "KeyboardInterrupt", "LookupError", "MemoryError", "ModuleNotFoundError", "NameError",
            "NotADirectoryError", "NotImplementedError", "OSError", "OverflowError",
            "PendingDeprecationWarning", "PermissionError", "ProcessLookupError", "RecursionError",
            "ReferenceError", "ResourceWarning", "RuntimeError", "RuntimeWarning", "StopIteration",
            "StopAsyncIteration", "SyntaxError", "SyntaxWarning", "SystemError", "SystemExit",
            "TabError", "TimeoutError", "TypeError", "UnboundLocalError", "UnicodeDecodeError",
            "UnicodeEncodeError", "UnicodeError", "UnicodeTranslateError", "UnicodeWarning",
            "UserWarning", "ValueError", "Warning", "ZeroDivisionError",
        ]
        .into_iter()
        .collect()
    })
}

/// Python keywords that the bare-return matcher must not treat as identifiers.
pub fn get_literal_keywords() -> &'static FxHashSet<&'static str> {
    static SET: OnceLock<FxHashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| ["None", "True", "False"].into_iter().collect())
}
