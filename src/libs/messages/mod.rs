pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

/// Appends a validation message to an accumulated error buffer.
///
/// Validation collects every violated rule before reporting, with blank
/// lines between individual messages.
pub fn append_error(buffer: &mut String, msg: Message) {
    if !buffer.is_empty() {
        buffer.push_str("\n\n");
    }
    buffer.push_str(&msg.to_string());
}
