use neo2_common::keycodes::kc::*;
use neo2_firmware::{
    keymap::Layer,
    keymaps::neo2::{self, LAYER_NAMES, NEO2},
};

use super::*;

static BROKEN_LAYERS: [Layer<2, 2>; 2] = [[[FN0, FN1], [FN2, FN3]], [[TRNS, NO], [TRNS, FN4]]];
static BROKEN_ACTIONS: [Action; 4] = [
    Action::Macro(7),
    Action::Function(3),
    Action::Momentary(9),
    Action::No,
];
static BROKEN: Keymap<2, 2, 2> = Keymap::new(&BROKEN_LAYERS, [&BROKEN_ACTIONS, &[]], &[], &[]);

#[test]
fn neo2_is_valid() {
    let report = validate_keymap(&NEO2, &LAYER_NAMES);
    assert!(report.is_ok(), "{:?}", report.problems);
    assert_eq!(report.layers.len(), neo2::LAYER_COUNT);

    let base = &report.layers[neo2::BASE as usize];
    assert_eq!(base.name, "base");
    assert_eq!((base.no, base.transparent, base.function_keys), (7, 0, 8));

    let symbols = &report.layers[neo2::SYMBOLS as usize];
    assert_eq!(symbols.function_keys, 32);
    assert_eq!(symbols.transparent, 44);
}

#[test]
fn reports_unresolvable_function_keys() {
    let report = validate_keymap(&BROKEN, &["only"]);
    let problems: Vec<_> = report.problems.iter().map(|p| p.to_string()).collect();

    assert_eq!(
        problems,
        [
            "layer 0 key (0, 0) FN0: macro 7 is not defined",
            "layer 0 key (0, 1) FN1: function 3 is not defined",
            "layer 0 key (1, 0) FN2: layer 9 is not in the keymap",
            "layer 0 key (1, 1) FN3: no action in this layer or the base layer",
            "layer 1 key (1, 1) FN4: no action in this layer or the base layer",
        ]
    );
    assert_eq!(report.layers[1].name, "layer1");
    assert_eq!(
        (report.layers[1].no, report.layers[1].transparent),
        (1, 2)
    );
}
