//! Required-key checks for each dataset shape, built from hand-made records.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use dexcheck::data::{item, moves, pokemon, types};
use dexcheck::schema::check_record;

fn valid_pokemon() -> Value {
    json!({
        "id": 1,
        "name": {
            "english": "Bulbasaur",
            "japanese": "フシギダネ",
            "chinese": "妙蛙种子",
            "french": "Bulbizarre"
        },
        "type": ["Grass", "Poison"],
        "species": "Seed Pokémon",
        "description": "There is a plant seed on its back right from the day this Pokémon is born.",
        "evolution": { "next": [["2", "Level 16"]] },
        "profile": {
            "height": "0.7 m",
            "weight": "6.9 kg",
            "egg": ["Monster", "Grass"],
            "ability": [["Overgrow", "false"], ["Chlorophyll", "true"]],
            "gender": "87.5:12.5"
        },
        "base": {
            "HP": 45,
            "Attack": 49,
            "Defense": 49,
            "Sp. Attack": 65,
            "Sp. Defense": 65,
            "Speed": 45
        }
    })
}

fn valid_move() -> Value {
    json!({
        "id": "85",
        "name": {
            "english": "Thunderbolt",
            "japanese": "１０まんボルト",
            "chinese": "十万伏特",
            "french": "Tonnerre"
        },
        "type": "Electric",
        "category": "Special",
        "pp": "15",
        "power": "90",
        "accuracy": "100"
    })
}

fn valid_item() -> Value {
    json!({
        "id": 1,
        "name": {
            "english": "Master Ball",
            "japanese": "マスターボール",
            "chinese": "大师球"
        },
        "type": "pokeballs",
        "description": "The best Ball with the ultimate level of performance."
    })
}

fn valid_type() -> Value {
    json!({
        "english": "Fire",
        "japanese": "ほのお",
        "chinese": "火",
        "effective": ["Grass", "Ice", "Bug", "Steel"],
        "ineffective": ["Fire", "Water", "Rock", "Dragon"],
        "no_effect": []
    })
}

#[test]
fn conforming_records_have_no_failures() {
    assert_eq!(
        check_record(&valid_pokemon(), pokemon::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
    assert_eq!(
        check_record(&valid_move(), moves::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
    assert_eq!(
        check_record(&valid_item(), item::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
    assert_eq!(
        check_record(&valid_type(), types::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
}

#[test]
fn non_object_records_fail_every_top_level_field() {
    for record in [json!(null), json!("Bulbasaur"), json!(25), json!([])] {
        assert_eq!(
            check_record(&record, pokemon::REQUIRED_FIELDS),
            [
                "id",
                "name",
                "type",
                "species",
                "description",
                "evolution",
                "profile",
                "base"
            ]
        );
    }
}

#[test]
fn checking_is_idempotent() {
    let record = json!({"id": 25, "profile": {"height": "0.4 m"}});
    assert_eq!(
        check_record(&record, pokemon::REQUIRED_FIELDS),
        check_record(&record, pokemon::REQUIRED_FIELDS)
    );
}

#[test]
fn missing_gender_and_string_speed_are_reported_in_scan_order() {
    let mut record = valid_pokemon();
    record["profile"]
        .as_object_mut()
        .unwrap()
        .remove("gender");
    record["base"]["Speed"] = json!("45");
    assert_eq!(
        check_record(&record, pokemon::REQUIRED_FIELDS),
        ["profile.gender", "base.Speed"]
    );
}

#[test]
fn whitespace_only_species_counts_as_missing() {
    let mut record = valid_pokemon();
    record["species"] = json!("   ");
    assert_eq!(check_record(&record, pokemon::REQUIRED_FIELDS), ["species"]);
}

#[test]
fn type_array_with_non_string_element_is_malformed() {
    let mut record = valid_pokemon();
    record["type"] = json!(["Grass", 7]);
    assert_eq!(check_record(&record, pokemon::REQUIRED_FIELDS), ["type"]);
}

#[test]
fn empty_type_array_is_malformed() {
    let mut record = valid_pokemon();
    record["type"] = json!([]);
    assert_eq!(check_record(&record, pokemon::REQUIRED_FIELDS), ["type"]);
}

#[test]
fn non_object_profile_reports_only_the_container() {
    let mut record = valid_pokemon();
    record["profile"] = json!("tall");
    assert_eq!(check_record(&record, pokemon::REQUIRED_FIELDS), ["profile"]);
}

#[test]
fn empty_evolution_object_passes() {
    let mut record = valid_pokemon();
    record["evolution"] = json!({});
    assert_eq!(
        check_record(&record, pokemon::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
}

#[test]
fn absent_evolution_is_reported() {
    let mut record = valid_pokemon();
    record.as_object_mut().unwrap().remove("evolution");
    assert_eq!(
        check_record(&record, pokemon::REQUIRED_FIELDS),
        ["evolution"]
    );
}

#[test]
fn failure_names_are_unique_per_record() {
    let record = json!({
        "id": "not-a-number",
        "name": 3,
        "profile": {"egg": "Monster"}
    });
    let missing = check_record(&record, pokemon::REQUIRED_FIELDS);
    let unique: std::collections::HashSet<&String> = missing.iter().collect();
    assert_eq!(unique.len(), missing.len());
}

#[test]
fn dash_power_passes_but_numeric_power_fails() {
    let mut record = valid_move();
    record["power"] = json!("—");
    assert_eq!(
        check_record(&record, moves::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
    record["power"] = json!(90);
    assert_eq!(check_record(&record, moves::REQUIRED_FIELDS), ["power"]);
}

#[test]
fn category_must_match_a_known_variant_exactly() {
    let mut record = valid_move();
    for category in ["Physical", "Special", "Status", "Unknown"] {
        record["category"] = json!(category);
        assert_eq!(
            check_record(&record, moves::REQUIRED_FIELDS),
            Vec::<String>::new()
        );
    }
    for category in ["physical", "Magical", ""] {
        record["category"] = json!(category);
        assert_eq!(check_record(&record, moves::REQUIRED_FIELDS), ["category"]);
    }
}

#[test]
fn numeric_move_id_does_not_satisfy_the_string_id() {
    let mut record = valid_move();
    record["id"] = json!(85);
    assert_eq!(check_record(&record, moves::REQUIRED_FIELDS), ["id"]);
}

#[test]
fn item_missing_description_and_name_language() {
    let mut record = valid_item();
    record.as_object_mut().unwrap().remove("description");
    record["name"].as_object_mut().unwrap().remove("chinese");
    assert_eq!(
        check_record(&record, item::REQUIRED_FIELDS),
        ["name.chinese", "description"]
    );
}

#[test]
fn type_record_missing_no_effect_is_the_only_failure() {
    let mut record = valid_type();
    record.as_object_mut().unwrap().remove("no_effect");
    assert_eq!(check_record(&record, types::REQUIRED_FIELDS), ["no_effect"]);
}

#[test]
fn empty_effectiveness_lists_pass() {
    let mut record = valid_type();
    record["effective"] = json!([]);
    record["ineffective"] = json!([]);
    assert_eq!(
        check_record(&record, types::REQUIRED_FIELDS),
        Vec::<String>::new()
    );
}
