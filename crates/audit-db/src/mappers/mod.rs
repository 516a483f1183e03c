//! Model ↔ entity mappers

mod audit_record;
