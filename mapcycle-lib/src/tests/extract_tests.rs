use super::*;

use mapcycle_kv::parse_document;

fn names(maps: &MapList) -> Vec<(GameType, &str)> {
    maps.iter()
        .map(|r| (r.game_type, r.name.as_str()))
        .collect()
}

const SAMPLE: &str = r#""items_game"
{
	"maps"
	{
		"ctf"
		{
			"mm_type"	"core"
			"maplist"
			{
				"1" { "name" "ctf_2fort"  "enabled" "1" }
				"2" { "name" "ctf_well"   "enabled" "0" }
				"3" { "name" "ctf_turbine" "enabled" "1" }
			}
		}
		"koth"
		{
			"mm_type"	"alternative"
			"maplist"
			{
				"1" { "name" "koth_harvest_final" "enabled" "1" }
			}
		}
		"competitive_6v6"
		{
			"mm_type"	"competitive_6v6"
			"maplist"
			{
				"1" { "name" "cp_process_final" "enabled" "1" }
			}
		}
		"halloween"
		{
			"mm_type"	"special_events"
			"maplist"
			{
				"1" { "name" "koth_harvest_event" "enabled" "1" }
			}
		}
		"christmas"
		{
			"mm_type"	"special_events"
			"maplist"
			{
				"1" { "name" "ctf_doublefrost" "enabled" "1" }
			}
		}
		"arena"
		{
			"maplist"
			{
				"1" { "name" "arena_badlands" "enabled" "1" }
			}
		}
		"mvm"
		{
			"mm_type"	"core"
			"maplist"
			{
				"1" { "name" "mvm_decoy" "enabled" "1" }
			}
		}
	}
}
"#;

#[test]
fn test_default_policy() {
    let root = parse_document(SAMPLE).unwrap();
    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(
        names(&maps),
        vec![
            (GameType::Ctf, "ctf_2fort"),
            (GameType::Ctf, "ctf_turbine"),
            (GameType::Koth, "koth_harvest_final"),
        ]
    );
}

#[test]
fn test_seasonal_switches() {
    let root = parse_document(SAMPLE).unwrap();
    let options = GeneratorOptions::default().halloween(true).christmas(true);
    let maps = extract_maps(&root, &options);
    let found = names(&maps);
    assert!(found.contains(&(GameType::Halloween, "koth_harvest_event")));
    assert!(found.contains(&(GameType::Christmas, "ctf_doublefrost")));

    let options = GeneratorOptions::default().christmas(true);
    let found = names(&extract_maps(&root, &options)).len();
    assert_eq!(found, 4);
}

#[test]
fn test_category_switches() {
    let root = parse_document(SAMPLE).unwrap();

    let options = GeneratorOptions::default().no_comp(false);
    let maps = extract_maps(&root, &options);
    assert!(names(&maps).contains(&(GameType::Competitive6v6, "cp_process_final")));

    let options = GeneratorOptions::default().no_core(true).no_alternatives(true);
    assert!(extract_maps(&root, &options).is_empty());

    let options = GeneratorOptions::default().unlisted(true);
    let maps = extract_maps(&root, &options);
    assert_eq!(maps.of_type(GameType::Arena).count(), 1);
}

#[test]
fn test_unknown_game_type_is_skipped() {
    let root = parse_document(SAMPLE).unwrap();
    let options = GeneratorOptions::default()
        .unlisted(true)
        .halloween(true)
        .christmas(true)
        .no_comp(false);
    let maps = extract_maps(&root, &options);
    assert!(maps.iter().all(|r| r.name != "mvm_decoy"));
    assert_eq!(maps.len(), 7);
}

#[test]
fn test_missing_maps_section() {
    let root = parse_document(r#""items_game" { "items" { "1" { "name" "x" } } }"#).unwrap();
    assert!(extract_maps(&root, &GeneratorOptions::default()).is_empty());
}

#[test]
fn test_only_first_maps_section_is_read() {
    let text = r#""items_game"
{
	"maps" { "ctf" { "mm_type" "core" "maplist" { "1" { "name" "ctf_2fort" "enabled" "1" } } } }
	"maps" { "ctf" { "mm_type" "core" "maplist" { "1" { "name" "ctf_landfall" "enabled" "1" } } } }
}"#;
    let root = parse_document(text).unwrap();
    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(names(&maps), vec![(GameType::Ctf, "ctf_2fort")]);
}

#[test]
fn test_last_mm_type_wins() {
    let text = r#""items_game"
{
	"maps"
	{
		"ctf" { "mm_type" "competitive_6v6" "mm_type" "core" "maplist" { "1" { "name" "ctf_2fort" "enabled" "1" } } }
		"koth" { "mm_type" "core" "mm_type" "competitive_6v6" "maplist" { "1" { "name" "koth_viaduct" "enabled" "1" } } }
	}
}"#;
    let root = parse_document(text).unwrap();
    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(names(&maps), vec![(GameType::Ctf, "ctf_2fort")]);
}

#[test]
fn test_short_and_missing_names_are_dropped() {
    let text = r#""items_game"
{
	"maps"
	{
		"payload"
		{
			"mm_type" "core"
			"maplist"
			{
				"1" { "name" "pl" "enabled" "1" }
				"2" { "name" "" "enabled" "1" }
				"3" { "enabled" "1" }
				"4" { "name" "pl_" "enabled" "1" }
			}
		}
	}
}"#;
    let root = parse_document(text).unwrap();
    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(names(&maps), vec![(GameType::Payload, "pl_")]);
}

#[test]
fn test_enabled_values() {
    let text = r#""items_game"
{
	"maps"
	{
		"koth"
		{
			"mm_type" "core"
			"maplist"
			{
				"1" { "name" "koth_missing" }
				"2" { "name" "koth_garbage" "enabled" "yes" }
				"3" { "name" "koth_two" "enabled" "2" }
				"4" { "name" "koth_negative" "enabled" "-1" }
				"5" { "name" "koth_padded" "enabled" " 1 " }
				"6" { "name" "koth_zero" "enabled" "00" }
				"7" { "name" "koth_toggled" "enabled" "1" "enabled" "0" }
			}
		}
	}
}"#;
    let root = parse_document(text).unwrap();
    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(
        names(&maps),
        vec![
            (GameType::Koth, "koth_two"),
            (GameType::Koth, "koth_negative"),
            (GameType::Koth, "koth_padded"),
        ]
    );
}

#[test]
fn test_leading_int_is_nonzero() {
    assert_eq!(leading_int_is_nonzero("1"), Some(true));
    assert_eq!(leading_int_is_nonzero("  42abc"), Some(true));
    assert_eq!(leading_int_is_nonzero("-3"), Some(true));
    assert_eq!(leading_int_is_nonzero("+0"), Some(false));
    assert_eq!(leading_int_is_nonzero("000"), Some(false));
    assert_eq!(leading_int_is_nonzero("0x1"), Some(false));
    assert_eq!(leading_int_is_nonzero(""), None);
    assert_eq!(leading_int_is_nonzero("-"), None);
    assert_eq!(leading_int_is_nonzero("true"), None);
    assert_eq!(leading_int_is_nonzero("99999999999999999999999"), Some(true));
    assert_eq!(leading_int_is_nonzero("-00000000000000000000000"), Some(false));
}

fn entry(name: &str, enabled: &str) -> KvSection {
    KvSection::new("1")
        .with_attribute("name", name)
        .with_attribute("enabled", enabled)
}

#[test]
fn test_oversized_enabled_value_is_enabled() {
    let root = KvSection::new("items_game").with_child(
        KvSection::new("maps").with_child(
            KvSection::new("payload")
                .with_attribute("mm_type", "core")
                .with_child(
                    KvSection::new("maplist")
                        .with_child(entry("pl_badwater", "99999999999999999999999"))
                        .with_child(entry("pl_upward", "00000000000000000000000")),
                ),
        ),
    );

    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(names(&maps), vec![(GameType::Payload, "pl_badwater")]);
}

#[test]
fn test_every_maplist_in_a_bucket_is_read() {
    let root = KvSection::new("items_game").with_child(
        KvSection::new("maps").with_child(
            KvSection::new("koth")
                .with_attribute("mm_type", "core")
                .with_child(KvSection::new("maplist").with_child(entry("koth_viaduct", "1")))
                .with_child(KvSection::new("maplist").with_child(entry("koth_lakeside", "1"))),
        ),
    );

    let maps = extract_maps(&root, &GeneratorOptions::default());
    assert_eq!(
        names(&maps),
        vec![(GameType::Koth, "koth_viaduct"), (GameType::Koth, "koth_lakeside")]
    );
}
