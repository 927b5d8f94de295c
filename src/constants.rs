pub const TRUE_LITERAL: &str = "true";
pub const FALSE_LITERAL: &str = "false";

// Rows are re-joined with this before handing them to the CSV reader:
pub const FIELD_SEPARATOR: u8 = b' ';

pub const INDENT: &str = "   ";
pub const TRUE_BRANCH_PREFIX: &str = "True: ";
pub const FALSE_BRANCH_PREFIX: &str = "False: ";
