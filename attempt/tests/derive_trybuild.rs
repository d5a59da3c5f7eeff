//! trybuild coverage for `#[derive(FailureReason)]`.
//!
//! Pass cases check the generated keys and templates at runtime inside the
//! fixture's `main`; compile-fail cases pin the diagnostics for malformed
//! input.

#[test]
fn failure_reason_derive_compiles() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/derive_keys_and_templates.rs");
    t.pass("tests/trybuild/derive_unit_struct.rs");
    t.pass("tests/trybuild/crate_path_alias.rs");
}

#[test]
fn failure_reason_derive_rejects_malformed_input() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/trybuild/variant_with_fields.rs");
    t.compile_fail("tests/trybuild/unknown_attribute_key.rs");
}
