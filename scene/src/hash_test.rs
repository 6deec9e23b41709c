use super::*;

#[test]
fn empty_string_is_offset_basis() {
    assert_eq!(hash_string_to_int(""), 2_166_136_261);
}

#[test]
fn same_input_same_output() {
    assert_eq!(hash_string_to_int("a"), hash_string_to_int("a"));
}

#[test]
fn known_values() {
    assert_eq!(hash_string_to_int("a"), 3_826_002_220);
    assert_eq!(hash_string_to_int("b"), 3_876_335_077);
    assert_eq!(hash_string_to_int("root"), 553_455_173);
    assert_eq!(hash_string_to_int("scene"), 543_410_963);
}

#[test]
fn distinct_inputs_usually_differ() {
    assert_ne!(hash_string_to_int("a"), hash_string_to_int("b"));
    assert_ne!(hash_string_to_int("scene.id"), hash_string_to_int("scene.mood"));
}

#[test]
fn order_dependent() {
    assert_ne!(hash_string_to_int("ab"), hash_string_to_int("ba"));
}

#[test]
fn wraps_on_long_input() {
    let long = "x".repeat(10_000);
    assert_eq!(hash_string_to_int(&long), hash_string_to_int(&long));
}
