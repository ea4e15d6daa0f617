use uuid::Uuid;

/// Fresh id for a protocol or file entry.
///
/// UUID v7: millisecond timestamp prefix plus random bits, so ids stay
/// roughly creation-ordered.
pub fn new_entry_id() -> String {
    Uuid::now_v7().to_string()
}
