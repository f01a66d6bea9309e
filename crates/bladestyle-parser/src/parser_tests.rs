//! End-to-end tests for the parsing pipeline and the emitter.
//!
//! These run source text through [`parse`](crate::parse) against the built-in
//! catalog and check the resulting trees, the diagnostics, and the canonical
//! text written back out.

use bladestyle_core::{
    Category, Registry, StyleDef, StyleTree, Syntax, catalog,
    generator::ParamInit,
};

use crate::{
    EmitOptions, MAX_NESTING, describe, error::ErrorCode, parse, parse_into, to_source, to_source_with,
};

fn registry() -> &'static Registry {
    catalog::builtin_registry()
}

/// Parse, then write the root back out.
fn round_trip(source: &str) -> String {
    let tree = parse(source, registry())
        .unwrap_or_else(|err| panic!("`{source}` should parse: {err:?}"));
    let root = tree.root().expect("parse sets the root");
    to_source(&tree, root).unwrap_or_else(|err| panic!("`{source}` should emit: {err}"))
}

fn error_code(source: &str) -> Option<ErrorCode> {
    let err = parse(source, registry()).expect_err("source should fail to parse");
    err.diagnostics().first().and_then(|d| d.code())
}

/// Small expressions that fill a slot of each category.
const PREFERENCE: [(Category, &str); 11] = [
    (Category::Color, "Red"),
    (Category::Layer, "AlphaL<Red,Int<16384>>"),
    (Category::Function, "Int<100>"),
    (Category::TimeFunction, "WavLen<>"),
    (Category::Transition, "TrInstant"),
    (Category::Effect, "EFFECT_CLASH"),
    (Category::LockupType, "SaberBase::LOCKUP_NORMAL"),
    (Category::Argument, "BASE_COLOR_ARG"),
    (Category::Function3D, "BladeDirection3D"),
    (Category::Builtin, "&style_pov"),
    (Category::Wrapper, "StylePtr<Red>()"),
];

/// Canonical source text using every parameter of `def` once.
fn sample_source(def: &StyleDef) -> String {
    let mut chosen: Vec<Option<Category>> = Vec::new();
    let mut args = Vec::new();
    for param in def.params {
        let text = match param.init {
            ParamInit::Number(value) => {
                chosen.push(None);
                value.clamp(-32768, 32768).to_string()
            }
            ParamInit::Bits(value) => {
                chosen.push(None);
                format!("0b{value:016b}")
            }
            ParamInit::Bool(value) => {
                chosen.push(None);
                u8::from(value).to_string()
            }
            ParamInit::Style | ParamInit::LayerBase => {
                let referenced = param
                    .ty
                    .refarg()
                    .and_then(|n| chosen.get(usize::from(n) - 1).copied().flatten());
                let (category, text) = PREFERENCE
                    .iter()
                    .find(|(category, _)| match referenced {
                        Some(target) => *category == target,
                        None => param.ty.accepts(*category),
                    })
                    .unwrap_or_else(|| panic!("no sample for `{}` of {}", param.name, def.name));
                chosen.push(Some(*category));
                (*text).to_string()
            }
        };
        args.push(text);
    }

    match def.syntax {
        Syntax::Reference => format!("&{}", def.name),
        Syntax::Bare if args.is_empty() => def.name.to_string(),
        Syntax::Bare | Syntax::Template => format!("{}<{}>", def.name, args.join(",")),
        Syntax::Call => format!("{}<{}>()", def.name, args.join(",")),
    }
}

// ===================
// Round trip
// ===================

#[test]
fn test_round_trip_every_catalog_entry() {
    for (family, generator) in registry().iter() {
        let source = sample_source(generator.def());
        let emitted = round_trip(&source);
        assert_eq!(emitted, source, "{family} `{}`", generator.name());

        // Structure survives a second pass.
        let first = parse(&source, registry()).expect("parses");
        let second = parse(&emitted, registry()).expect("reparses");
        let listing = |tree: &StyleTree| describe(tree, tree.root().expect("root")).expect("live");
        assert_eq!(listing(&first), listing(&second));
    }
}

#[test]
fn test_round_trip_realistic_styles() {
    for source in [
        "StylePtr<Layers<Blue,AlphaL<White,SwingSpeed<600>>,TransitionEffectL<TrConcat<TrInstant,White,TrFade<300>>,EFFECT_CLASH>,InOutTrL<TrWipe<300>,TrWipeIn<500>,Black>>>()",
        "StylePtr<InOutHelper<Mix<SmoothSoundLevel,Blue,Cyan>,300,800,Black,1>>()",
        "StylePtr<Sequence<Red,Black,100,16,0b0000000000001111,0b1111000000000000>>()",
        "Layers<Rgb<0,0,255>,ResponsiveLockupL<White,TrInstant,TrFade<200>,Int<26000>,Int<6000>,Int<10000>>>",
        "&style_charging",
    ] {
        assert_eq!(round_trip(source), source);
    }
}

#[test]
fn test_trwipex_literal_scenario() {
    let tree = parse("TrWipeX<1000>", registry()).expect("parses");
    let root = tree.root().expect("root");
    let int = tree.param_style(root, 0).expect("slot").expect("bound");

    let node = tree.get(int).expect("live");
    assert_eq!(node.name(), "Int");
    assert_eq!(node.category(), Category::Function);
    assert_eq!(tree.param_number(int, 0), Ok(1000));
    assert_eq!(tree.owner(int), Some((root, 0)));
    assert_eq!(to_source(&tree, root).as_deref(), Ok("TrWipeX<1000>"));

    let explicit = EmitOptions {
        literal_shorthand: false,
        ..EmitOptions::default()
    };
    assert_eq!(
        to_source_with(&tree, root, &explicit).as_deref(),
        Ok("TrWipeX<Int<1000>>")
    );
}

// ===================
// Failure modes
// ===================

#[test]
fn test_empty_input() {
    for source in ["", "   ", "\n\t \r\n"] {
        let err = parse(source, registry()).expect_err("empty");
        assert!(err.has_code(ErrorCode::E001));
        assert!(!err.name_found());
    }
}

#[test]
fn test_unknown_name_is_not_found() {
    let err = parse("StylePtr<Rde>()", registry()).expect_err("unknown");
    assert!(err.has_code(ErrorCode::E200));
    assert!(!err.name_found());

    let err = parse("StylePtr<Red", registry()).expect_err("unbalanced");
    assert!(err.name_found());
}

#[test]
fn test_wrapper_accepts_only_colors() {
    assert_eq!(error_code("StylePtr<TrFade<300>>()"), Some(ErrorCode::E202));
    assert_eq!(error_code("StylePtr<Int<5>>()"), Some(ErrorCode::E202));
    assert_eq!(error_code("StylePtr<5>()"), Some(ErrorCode::E202));
    assert_eq!(round_trip("StylePtr<Rgb<1,2,3>>()"), "StylePtr<Rgb<1,2,3>>()");
}

#[test]
fn test_layer_base_narrowed_by_position() {
    let source = "StylePtr<Layers<AlphaL<Red,Int<1>>>>()";
    assert_eq!(round_trip(source), source);

    // A layer as the base is fine on its own, but not where a colour is due.
    let mut tree = StyleTree::with_layer_base_narrowing();
    assert!(parse_into("Layers<AlphaL<Red,Int<1>>>", registry(), &mut tree).is_ok());
    let err = parse_into(source, registry(), &mut tree).expect_err("narrowed base");
    assert!(err.has_code(ErrorCode::E202));
    assert_eq!(tree.len(), 4);
}

#[test]
fn test_deepest_style_round_trips() {
    let gradients = |depth: usize| {
        format!("{}Red{}", "Gradient<".repeat(depth), ">".repeat(depth))
    };
    let source = gradients(MAX_NESTING);
    assert_eq!(round_trip(&source), source);

    let err = parse(&gradients(MAX_NESTING + 1), registry()).expect_err("too deep");
    assert!(err.has_code(ErrorCode::E102));
    assert!(err.name_found());
}

#[test]
fn test_refarg_follows_earlier_argument() {
    assert!(parse("Mix<Int<1>,Red,Blue,Green>", registry()).is_ok());
    assert_eq!(
        error_code("Mix<Int<1>,Red,AlphaL<Red,Int<1>>>"),
        Some(ErrorCode::E202)
    );
}

#[test]
fn test_scalar_errors() {
    assert_eq!(error_code("InOutHelper<Red,300,800,Black,2>"), Some(ErrorCode::E203));
    assert_eq!(error_code("Rgb<Red,0,0>"), Some(ErrorCode::E202));
    assert_eq!(error_code("Rgb<1,2,3,4>"), Some(ErrorCode::E201));
    assert_eq!(error_code("Rgb<1,0b2,3>"), Some(ErrorCode::E003));
    assert_eq!(error_code("Rgb<1;2,3>"), Some(ErrorCode::E002));
}

#[test]
fn test_failed_parse_into_leaves_tree_unchanged() {
    let mut tree = parse("StylePtr<Red>()", registry()).expect("parses");
    let root = tree.root();
    let before = tree.len();

    for source in [
        "Layers<Red,AlphaL<White,Nope>>",
        "Layers<Red,AlphaL<White,Int<1>>,TrFade<300>>",
        "Mix<Int<1>,Red,Blue",
        "",
    ] {
        assert!(parse_into(source, registry(), &mut tree).is_err(), "{source}");
        assert_eq!(tree.len(), before, "{source}");
        assert_eq!(tree.root(), root);
        assert!(tree.detached().is_empty());
    }
}

#[test]
fn test_parse_into_returns_detached_node() {
    let mut tree = parse("StylePtr<Red>()", registry()).expect("parses");
    let root = tree.root().expect("root");
    let id = parse_into("Blue", registry(), &mut tree).expect("parses");
    assert_eq!(tree.detached(), [id]);

    tree.set_param(root, 0, bladestyle_core::Arg::Node(id))
        .expect("Blue fits StylePtr");
    assert_eq!(to_source(&tree, root).as_deref(), Ok("StylePtr<Blue>()"));
}

// ===================
// Property tests
// ===================

mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    const SOURCES: &[&str] = &[
        "Red",
        "Rgb<255,-12,0x7F>",
        "StylePtr<AudioFlicker<Rgb<0,0,255>,Cyan>>()",
        "TrWipeX<1000>",
        "Sequence<Red,Black,100,16,0b0000000000000101>",
        "Layers<Blue,AlphaL<White,SwingSpeed<600>>>",
        "&style_charging",
        "Mix<Int<16384>,Red,Blue>",
    ];

    const WHITESPACE: &[&str] = &["", "", " ", "\t", "\n", "\r\n", "  ", "\u{00A0}"];

    // ===================
    // Strategies
    // ===================

    /// A known-good source with whitespace to insert before each character
    /// and at the end.
    fn spaced_source_strategy() -> impl Strategy<Value = (&'static str, Vec<&'static str>)> {
        prop::sample::select(SOURCES).prop_flat_map(|source| {
            (
                Just(source),
                prop::collection::vec(prop::sample::select(WHITESPACE), source.len() + 1),
            )
        })
    }

    /// A known-good source and the position of one of its angle brackets.
    fn bracket_removal_strategy() -> impl Strategy<Value = (&'static str, usize)> {
        prop::sample::select(SOURCES)
            .prop_filter("needs brackets", |s| s.contains('<'))
            .prop_flat_map(|source| {
                let positions: Vec<usize> = source
                    .char_indices()
                    .filter(|(_, c)| matches!(c, '<' | '>'))
                    .map(|(i, _)| i)
                    .collect();
                (Just(source), prop::sample::select(positions))
            })
    }

    fn unknown_name_strategy() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{2,10}[A-Z][a-z]{2,6}"
            .prop_filter("must not be a catalog name", |s| registry().get(s).is_none())
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Whitespace anywhere, even inside a literal, changes nothing.
    fn check_whitespace_is_insignificant(
        source: &str,
        spaces: &[&str],
    ) -> Result<(), TestCaseError> {
        let mut spaced = String::new();
        for (c, space) in source.chars().zip(spaces) {
            spaced.push_str(space);
            spaced.push(c);
        }
        if let Some(last) = spaces.last() {
            spaced.push_str(last);
        }

        let tree = parse(&spaced, registry());
        prop_assert!(tree.is_ok(), "`{spaced:?}` failed: {:?}", tree.err());
        let tree = tree.map_err(|e| TestCaseError::fail(e.to_string()))?;
        let root = tree.root().ok_or_else(|| TestCaseError::fail("no root"))?;
        prop_assert_eq!(to_source(&tree, root), Ok(round_trip(source)));
        Ok(())
    }

    /// Dropping any one angle bracket is reported as unbalanced.
    fn check_missing_bracket_is_unbalanced(source: &str, at: usize) -> Result<(), TestCaseError> {
        let mut broken = source.to_string();
        broken.remove(at);

        let err = parse(&broken, registry());
        prop_assert!(err.is_err(), "`{broken}` parsed");
        let err = err.err().ok_or_else(|| TestCaseError::fail("parsed"))?;
        prop_assert!(err.has_code(ErrorCode::E101), "`{broken}`: {err}");
        prop_assert!(err.name_found());
        Ok(())
    }

    fn check_unknown_name_not_found(name: &str) -> Result<(), TestCaseError> {
        for source in [name.to_string(), format!("StylePtr<{name}<1,2>>()")] {
            let err = parse(&source, registry()).err();
            prop_assert!(err.as_ref().is_some_and(|e| !e.name_found()), "`{source}`: {err:?}");
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn whitespace_is_insignificant((source, spaces) in spaced_source_strategy()) {
            check_whitespace_is_insignificant(source, &spaces)?;
        }

        #[test]
        fn missing_bracket_is_unbalanced((source, at) in bracket_removal_strategy()) {
            check_missing_bracket_is_unbalanced(source, at)?;
        }

        #[test]
        fn unknown_name_not_found(name in unknown_name_strategy()) {
            check_unknown_name_not_found(&name)?;
        }
    }
}
