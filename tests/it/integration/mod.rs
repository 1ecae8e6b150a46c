//! Integration tests: full gesture sequences and host workflows.
