use magick_options_core::channel::bits;
use magick_options_core::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn registry() -> &'static Registry {
    Registry::builtin()
}

fn command_entries() -> &'static [MnemonicEntry] {
    registry().command_table().unwrap().entries()
}

/// Tokens close to real command names that must not resolve, or must
/// resolve exactly as a linear scan would.
fn near_misses(name: &str) -> Vec<String> {
    let mut tokens = vec![
        format!("{name}x"),
        name.to_ascii_uppercase(),
        name.chars().rev().collect(),
    ];
    if name.len() > 1 {
        tokens.push(name[..name.len() - 1].to_string());
    }
    if let Some(rest) = name.strip_prefix('-') {
        tokens.push(format!("+{rest}"));
        tokens.push(format!("*{rest}"));
    }
    if let Some(rest) = name.strip_prefix('+') {
        tokens.push(format!("-{rest}"));
    }
    tokens
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn test_every_name_resolves_to_its_own_value() {
    for category in registry().categories() {
        let table = registry().table(category).unwrap();
        for entry in table.entries() {
            let found = registry().lookup(category, entry.name).unwrap();
            assert_eq!(found.value(), entry.value, "{category}: {}", entry.name);
        }
    }
}

#[test]
fn test_reverse_lookup_names_an_equivalent_row() {
    for category in registry().categories() {
        let table = registry().table(category).unwrap();
        for entry in table.entries().iter().filter(|entry| !entry.hidden) {
            let name = registry().mnemonic(category, entry.value).unwrap();
            assert_ne!(name, UNDEFINED_MNEMONIC, "{category}: {}", entry.name);
            assert_eq!(
                registry().lookup(category, name).unwrap().value(),
                entry.value,
                "{category}: {} reversed to {name}",
                entry.name
            );
        }
    }
}

#[test]
fn test_reverse_lookup_prefers_canonical_spelling() {
    assert_eq!(registry().mnemonic(Category::Align, 1).unwrap(), "Center");
    let middle = registry().lookup(Category::Align, "Middle").unwrap();
    assert_eq!(middle.value(), 1);
}

#[test]
fn test_reverse_lookup_of_missing_value_is_undefined() {
    assert_eq!(registry().mnemonic(Category::Gravity, 9_999).unwrap(), "undefined");
    assert_eq!(registry().mnemonic(Category::Boolean, -7).unwrap(), "undefined");
}

// ---------------------------------------------------------------------------
// Command table
// ---------------------------------------------------------------------------

#[test]
fn test_command_table_is_sorted() {
    assert_eq!(validate_command_order(command_entries()), Vec::<TableError>::new());
}

#[test]
fn test_builtin_tables_are_valid() {
    for category in registry().categories() {
        let table = registry().table(category).unwrap();
        assert!(validate_table(category, table.entries()).is_empty(), "{category}");
    }
}

#[test]
fn test_binary_search_matches_linear_scan() {
    let table = registry().command_table().unwrap();
    for entry in command_entries() {
        assert_eq!(table.lookup(entry.name), entry, "{}", entry.name);
        for token in near_misses(entry.name) {
            assert_eq!(
                table.lookup(&token),
                table.linear_lookup(&token),
                "{token} (near {})",
                entry.name
            );
        }
    }
}

#[test]
fn test_previously_misordered_rows_resolve() {
    for name in ["+dissimilarity-threshold", "-dissolve", "-subimage", "-subimage-search"] {
        let entry = registry().find_command(name).unwrap();
        assert_eq!(entry.name, name);
    }
}

#[test]
fn test_command_arguments_and_flags() {
    let annotate = registry().find_command("-annotate").unwrap();
    assert_eq!(annotate.value, 2);
    assert!(annotate.flags.contains(OptionFlags::ALWAYS_INTERPRET_ARGS));

    let write = registry().find_command("-write").unwrap();
    assert!(write.flags.contains(OptionFlags::FIRE | OptionFlags::NEVER_INTERPRET_ARGS));

    let open = registry().find_command("(").unwrap();
    assert!(open.hidden);
    assert!(open.flags.contains(OptionFlags::NO_IMAGE_OPERATOR));
}

#[test]
fn test_command_miss_is_undefined_sentinel() {
    let miss = registry().find_command("-definitely-not-an-option").unwrap();
    assert!(miss.is_undefined());
    assert_eq!(miss.value, 0);
    assert!(miss.flags.is_empty());
}

#[test]
fn test_parse_flags_of_commands() {
    let flags = registry()
        .parse_flags(Category::Command, true, "-resize,+repage")
        .unwrap();
    assert_eq!(flags, OptionFlags::SIMPLE_OPERATOR);
}

// ---------------------------------------------------------------------------
// Lists and channels
// ---------------------------------------------------------------------------

#[test]
fn test_channel_negation() {
    let mask = registry().parse(Category::Channel, true, "All,!Red").unwrap();
    assert_eq!(mask, bits::COMPOSITE & !bits::RED);
}

#[test]
fn test_delimiters_are_interchangeable() {
    let pairs = [("Red", "Blue"), ("Cyan", "Black"), ("Alpha", "Sync")];
    for (a, b) in pairs {
        let comma = registry().parse(Category::Channel, true, &format!("{a},{b}"));
        let pipe = registry().parse(Category::Channel, true, &format!("{a}|{b}"));
        assert_eq!(comma, pipe, "{a} {b}");
        assert!(comma.is_ok());
    }
}

#[test]
fn test_normalization_fallback() {
    let expected = registry().lookup(Category::Dither, "FloydSteinberg").unwrap().value();
    for spelling in ["floyd-steinberg", "floyd_steinberg", "Floyd-Steinberg"] {
        assert_eq!(registry().parse(Category::Dither, false, spelling), Ok(expected));
    }
}

#[test]
fn test_unknown_token_fails_whole_list() {
    let err = registry().parse(Category::Channel, true, "Red,Green,Mauve").unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownMnemonic {
            category: Category::Channel,
            token: "Mauve".to_string(),
        }
    );
}

#[test]
fn test_overlong_token_is_truncated() {
    let token = "x".repeat(MAX_TOKEN_LEN + 10);
    let table = registry().table(Category::Channel).unwrap();
    let err = ListParser::new(table).parse(&token).unwrap_err();
    match err {
        ResolveError::UnknownMnemonic { token, .. } => assert_eq!(token.len(), MAX_TOKEN_LEN),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_channel_shorthand() {
    assert_eq!(registry().parse_channels("rgb"), Ok(bits::RED | bits::GREEN | bits::BLUE));
    assert_eq!(registry().parse_channels("r,Alpha"), Ok(bits::RED | bits::ALPHA));
    assert_eq!(registry().parse_channels("cmyk"), Ok(0xf));
    assert_eq!(registry().parse_channels("Sync"), Ok(bits::SYNC));
    assert!(registry().parse_channels("rgbq").is_err());
}

#[test]
fn test_pixel_channels() {
    assert_eq!(registry().parse_pixel_channel("Black"), Ok(3));
    assert_eq!(registry().parse_pixel_channel("composite"), Ok(32));
    assert_eq!(registry().parse_pixel_channel("12"), Ok(12));
    assert_eq!(registry().parse_pixel_channel(";"), Ok(0));
    assert!(registry().parse_pixel_channel("99").is_err());
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[test]
fn test_categories_by_name() {
    assert_eq!(registry().category("Filter"), Ok(Category::Filter));
    assert_eq!(registry().category("units"), Ok(Category::Resolution));
    assert_eq!(registry().category("Intensity"), Ok(Category::PixelIntensity));
    assert_eq!(registry().category("virtual_pixel"), Ok(Category::VirtualPixel));
    assert!(registry().category("Purple").is_err());
}

#[test]
fn test_every_listed_category_is_known() {
    let list = registry().table(Category::List).unwrap();
    for entry in list.entries() {
        assert!(Category::from_value(entry.value).is_some(), "{}", entry.name);
    }
}

#[test]
fn test_categories_without_tables() {
    for category in [Category::Font, Category::Format, Category::Undefined] {
        assert_eq!(
            registry().list(category),
            Err(ResolveError::UnknownCategory(category))
        );
    }
}

#[test]
fn test_debug_shares_log_event_table() {
    assert_eq!(
        registry().list(Category::Debug).unwrap(),
        registry().list(Category::LogEvent).unwrap()
    );
    assert_eq!(registry().parse(Category::Debug, true, "All"), Ok(0x7fff7fff));
}

#[test]
fn test_listing_skips_hidden_rows() {
    let all = registry().mnemonics(Category::Gravity).unwrap();
    let visible = registry().list(Category::Gravity).unwrap();
    assert!(all.contains(&"Undefined"));
    assert!(!visible.contains(&"Undefined"));
    assert!(visible.contains(&"NorthWest"));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_entry_serializes_to_json() {
    let entry = registry().find_command("-resize").unwrap();
    let json = serde_json::to_value(entry).unwrap();
    assert_eq!(json["name"], "-resize");
    assert_eq!(json["value"], 1);
    assert_eq!(json["hidden"], false);
    assert_eq!(json["flags"], "SIMPLE_OPERATOR");
    assert_eq!(serde_json::to_value(Category::Filter).unwrap(), "Filter");
}
