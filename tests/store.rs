use mexpr::{engine::lexer::tokenize, RuntimeError, VariableStore};

fn set(store: &mut VariableStore, name: &str, source: &str) -> Result<(), RuntimeError> {
    store.set(name, tokenize(source).unwrap())
}

#[test]
fn stores_and_returns_bindings() {
    let mut store = VariableStore::new();
    set(&mut store, "radius", "2 + 1").unwrap();

    assert!(store.contains("radius"));
    assert_eq!(store.len(), 1);

    let tokens = store.get("radius").unwrap();
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].value(), "2");
}

#[test]
fn replaces_existing_bindings() {
    let mut store = VariableStore::new();
    set(&mut store, "x", "1").unwrap();
    set(&mut store, "x", "2").unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("x").unwrap()[0].value(), "2");
}

#[test]
fn keeps_insertion_order() {
    let mut store = VariableStore::new();
    set(&mut store, "b", "1").unwrap();
    set(&mut store, "a", "2").unwrap();
    set(&mut store, "c", "3").unwrap();
    set(&mut store, "a", "4").unwrap();

    let names: Vec<&str> = store.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn rejects_invalid_names() {
    let mut store = VariableStore::new();

    for name in ["", "1abc", "a_b", "va-r", "über"] {
        let error = set(&mut store, name, "1").unwrap_err();
        assert_eq!(error, RuntimeError::InvalidVariableName { name: name.to_string() });
    }

    assert!(store.is_empty());
}

#[test]
fn reports_unknown_variables() {
    let store = VariableStore::new();

    assert_eq!(store.get("ghost").unwrap_err(),
               RuntimeError::UnknownVariable { name: "ghost".to_string() });
}

#[test]
fn allows_references_to_variables_bound_later() {
    let mut store = VariableStore::new();
    set(&mut store, "area", "side * side").unwrap();
    set(&mut store, "side", "4").unwrap();

    assert_eq!(store.len(), 2);
}

#[test]
fn rejects_self_reference_and_rolls_back() {
    let mut store = VariableStore::new();

    let error = set(&mut store, "var1", "var1 + 1").unwrap_err();
    assert_eq!(error, RuntimeError::CircularReference { name: "var1".to_string() });
    assert!(!store.contains("var1"));
}

#[test]
fn rejects_indirect_cycles_and_rolls_back() {
    let mut store = VariableStore::new();
    set(&mut store, "a", "b + 1").unwrap();

    let error = set(&mut store, "b", "a + 1").unwrap_err();
    assert!(matches!(error, RuntimeError::CircularReference { .. }));
    assert!(!store.contains("b"));
    assert!(store.contains("a"));
}

#[test]
fn rolls_back_to_the_previous_binding_on_a_cycle() {
    let mut store = VariableStore::new();
    set(&mut store, "a", "b").unwrap();
    set(&mut store, "b", "1").unwrap();

    let error = set(&mut store, "b", "a").unwrap_err();
    assert!(matches!(error, RuntimeError::CircularReference { .. }));
    assert_eq!(store.get("b").unwrap()[0].value(), "1");
}

#[test]
fn removes_and_clears_bindings() {
    let mut store = VariableStore::new();
    set(&mut store, "x", "1").unwrap();
    set(&mut store, "y", "2").unwrap();

    assert!(store.remove("x"));
    assert!(!store.remove("x"));
    assert_eq!(store.len(), 1);

    store.clear();
    assert!(store.is_empty());
}

#[test]
fn returns_copies_of_bound_tokens() {
    let mut store = VariableStore::new();
    set(&mut store, "x", "1").unwrap();

    let copy = store.get("x").unwrap();
    store.remove("x");

    assert_eq!(copy[0].value(), "1");
}
