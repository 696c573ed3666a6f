//! PHP built-in function registry
//!
//! Stands in for `function_exists()` against the ambient runtime: calls to
//! these names are never tracked, regardless of arity. Partial list - the
//! functions that actually show up in application code.

/// PHP built-in functions (partial list - most common ones)
pub const PHP_BUILTIN_FUNCTIONS: &[&str] = &[
    // String functions
    "strlen", "substr", "strpos", "stripos", "strrpos", "str_replace", "str_ireplace",
    "strtolower", "strtoupper", "ucfirst", "lcfirst", "ucwords", "trim", "ltrim", "rtrim",
    "explode", "implode", "join", "sprintf", "printf", "vsprintf", "str_pad", "str_repeat",
    "str_split", "wordwrap", "nl2br", "htmlspecialchars", "htmlentities", "strip_tags",
    "addslashes", "stripslashes", "ord", "chr", "number_format", "parse_str",
    "http_build_query", "preg_match", "preg_match_all", "preg_replace", "preg_split",
    "preg_quote", "str_contains", "str_starts_with", "str_ends_with",
    // Array functions
    "count", "sizeof", "array_push", "array_pop", "array_shift", "array_unshift",
    "array_merge", "array_combine", "array_chunk", "array_slice", "array_splice",
    "array_keys", "array_values", "array_flip", "array_reverse", "array_search",
    "array_key_exists", "in_array", "array_unique", "array_diff", "array_intersect",
    "array_map", "array_filter", "array_reduce", "array_walk", "array_column",
    "array_fill", "range", "sort", "rsort", "asort", "arsort", "ksort", "krsort",
    "usort", "uasort", "uksort", "array_sum", "array_key_first", "array_key_last",
    // File functions
    "file_get_contents", "file_put_contents", "file", "fopen", "fclose", "fread",
    "fwrite", "fgets", "feof", "file_exists", "is_file", "is_dir", "is_readable",
    "is_writable", "mkdir", "rmdir", "unlink", "rename", "copy", "glob", "scandir",
    "realpath", "dirname", "basename", "pathinfo", "filesize", "filemtime",
    // Type functions
    "gettype", "settype", "intval", "floatval", "strval", "boolval", "is_null",
    "is_bool", "is_int", "is_integer", "is_float", "is_string", "is_array",
    "is_object", "is_callable", "is_numeric", "is_scalar", "is_iterable",
    "is_countable",
    // Class/Object functions
    "class_exists", "interface_exists", "method_exists", "property_exists",
    "get_class", "get_parent_class", "get_object_vars", "is_a", "is_subclass_of",
    // Math functions
    "abs", "ceil", "floor", "round", "max", "min", "pow", "sqrt", "exp", "log",
    "intdiv", "rand", "mt_rand", "random_int", "fmod",
    // Date/Time functions
    "time", "mktime", "strtotime", "date", "gmdate", "checkdate", "date_create",
    "date_format",
    // JSON functions
    "json_encode", "json_decode", "json_last_error", "json_last_error_msg",
    // Error handling
    "trigger_error", "set_error_handler", "restore_error_handler", "error_reporting",
    "error_log",
    // Output
    "print_r", "var_dump", "var_export", "ob_start", "ob_get_clean", "ob_end_clean",
    // Variable functions
    "compact", "extract", "define", "defined", "constant",
    // Misc
    "call_user_func", "call_user_func_array", "func_get_args", "func_num_args",
    "function_exists", "header", "headers_sent", "setcookie", "die", "sleep",
    "usleep", "flush", "phpversion", "serialize", "unserialize", "password_hash",
    "password_verify", "hash", "hash_hmac", "md5", "sha1", "crc32",
    "base64_encode", "base64_decode", "urlencode", "urldecode", "rawurlencode",
    "rawurldecode", "assert", "debug_backtrace", "register_shutdown_function",
];

/// Is this name a recognized PHP built-in callable?
///
/// PHP function names are case-insensitive.
pub fn is_builtin(name: &str) -> bool {
    PHP_BUILTIN_FUNCTIONS
        .iter()
        .any(|f| f.eq_ignore_ascii_case(name))
}
