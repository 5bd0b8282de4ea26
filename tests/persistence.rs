mod common;

use common::{IndividualBuilder, PondBuilder};
use pondlife_lib::model::persistence::{decode_snapshot, load_snapshot, save_snapshot};
use pondlife_lib::model::state::{BreedingPair, DiscoverySet, GeneticVector, Pond, Produce, QualityTier};
use pondlife_lib::model::{PondEngine, PondSnapshot};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pondlife_it_{}_{}.json", name, std::process::id()))
}

prop_compose! {
    fn arb_genes()(
        weight in 0u8..=100,
        growth_rate in 0u8..=100,
        disease_resistance in 0u8..=100,
        quality_gene in 0u8..=100,
        mutation_rate in 1u8..=50
    ) -> GeneticVector {
        GeneticVector { weight, growth_rate, disease_resistance, quality_gene, mutation_rate }
    }
}

prop_compose! {
    fn arb_valid_pond()(level in 1u8..=3)(
        level in Just(level),
        genes in prop::collection::vec(arb_genes(), 0..=(level as usize * 4)),
        flags in prop::collection::vec((any::<bool>(), 0u32..5, 0u32..40), 12),
        water in 0u8..=100,
        fed_today in any::<bool>(),
        breeding in any::<bool>(),
        days_remaining in 1u32..=3,
        output in prop::collection::vec(prop::sample::select(QualityTier::ALL.to_vec()), 0..4)
    ) -> Pond {
        let individuals: Vec<_> = genes
            .into_iter()
            .zip(flags)
            .enumerate()
            .map(|(i, (g, (sick, sick_days, age)))| {
                let mut fish = IndividualBuilder::new(i as u128 + 1)
                    .genes(g)
                    .variant(if i % 2 == 0 { "kohaku" } else { "asagi" })
                    .build();
                fish.mature = age > 5;
                fish.days_in_pond = age;
                if sick {
                    fish.sick = true;
                    fish.sick_days = sick_days;
                }
                fish
            })
            .collect();
        let breeding_pair = (breeding && individuals.len() >= 2).then(|| BreedingPair {
            parent_a: individuals[0].id,
            parent_b: individuals[1].id,
            days_remaining,
            species_id: "koi".to_string(),
        });
        Pond {
            built: true,
            level,
            individuals,
            water_quality: f32::from(water),
            fed_today,
            collected_today: false,
            breeding_pair,
            pending_output: output.into_iter().map(|q| Produce::new("koi_roe", q)).collect(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_valid_state_survives_json_and_restore(
        pond in arb_valid_pond(),
        found in prop::collection::btree_set(
            prop::sample::select(vec!["kohaku", "asagi", "showa", "shusui", "comet"]),
            0..5
        )
    ) {
        let engine = PondEngine::default();
        let discovery: DiscoverySet = found.into_iter().collect();
        let snapshot = engine.snapshot(&pond, &discovery);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded = decode_snapshot(&json).unwrap();
        prop_assert_eq!(&decoded, &snapshot);

        let (restored, restored_discovery) = engine.restore(decoded, &mut ChaCha8Rng::seed_from_u64(0));
        prop_assert_eq!(restored, pond);
        prop_assert_eq!(restored_discovery, discovery);
    }
}

#[test]
fn test_file_roundtrip_preserves_running_pond() {
    let mut h = PondBuilder::new()
        .with_individual(IndividualBuilder::new(1).variant("kohaku").mature().build())
        .with_individual(IndividualBuilder::new(2).variant("asagi").mature().build())
        .build();
    h.engine
        .start_breeding(&mut h.pond, Uuid::from_u128(1), Uuid::from_u128(2))
        .unwrap();
    h.tick();
    h.discovery.insert("kohaku");

    let path = temp_path("running");
    save_snapshot(&h.engine.snapshot(&h.pond, &h.discovery), &path).unwrap();
    let (pond, discovery) = h.engine.restore(load_snapshot(&path).unwrap(), &mut h.rng);
    std::fs::remove_file(&path).ok();

    assert_eq!(pond, h.pond);
    assert_eq!(discovery, h.discovery);
    assert_eq!(pond.breeding_pair.unwrap().days_remaining, 2);
}

#[test]
fn test_hand_edited_snapshot_is_repaired() {
    let json = r#"{
        "pond": {
            "built": true,
            "level": 1,
            "water_quality": 180.0,
            "individuals": [
                {"id": "00000000-0000-0000-0000-000000000001", "species_id": "koi", "name": "A", "mature": true},
                {"id": "00000000-0000-0000-0000-000000000001", "species_id": "koi", "name": "A again"},
                {"id": "00000000-0000-0000-0000-000000000002", "species_id": "koi", "name": "B",
                 "genes": {"weight": 250}},
                {"id": "00000000-0000-0000-0000-000000000003", "species_id": "koi", "name": "C"},
                {"id": "00000000-0000-0000-0000-000000000004", "species_id": "koi", "name": "D"},
                {"id": "00000000-0000-0000-0000-000000000005", "species_id": "koi", "name": "E"}
            ],
            "breeding_pair": {
                "parent_a": "00000000-0000-0000-0000-000000000001",
                "parent_b": "00000000-0000-0000-0000-000000000005",
                "days_remaining": 2,
                "species_id": "koi"
            },
            "unknown_field": "ignored"
        },
        "discovered": ["kohaku", "kohaku"]
    }"#;

    let engine = PondEngine::default();
    let (pond, discovery) =
        engine.restore(decode_snapshot(json).unwrap(), &mut ChaCha8Rng::seed_from_u64(1));

    assert_eq!(pond.water_quality, 100.0);
    let names: Vec<&str> = pond.individuals.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D"]);
    assert_eq!(pond.individuals[1].genes.weight, 100);
    assert!(pond.breeding_pair.is_none(), "Parent E was truncated away");
    assert_eq!(discovery.len(), 1);
}

#[test]
fn test_nil_ids_are_reassigned() {
    let engine = PondEngine::default();
    let mut pond = Pond::new();
    pond.built = true;
    pond.individuals = vec![
        IndividualBuilder::new(0).build(),
        IndividualBuilder::new(0).build(),
    ];
    let snapshot = PondSnapshot {
        pond,
        discovered: Vec::new(),
    };
    let (restored, _) = engine.restore(snapshot.clone(), &mut ChaCha8Rng::seed_from_u64(21));
    assert_eq!(restored.count(), 2);
    assert!(restored.individuals.iter().all(|i| !i.id.is_nil()));
    assert_ne!(restored.individuals[0].id, restored.individuals[1].id);

    let (again, _) = engine.restore(snapshot, &mut ChaCha8Rng::seed_from_u64(21));
    assert_eq!(again, restored, "Same seed, same replacement ids");
}

#[test]
fn test_corrupt_file_is_an_error() {
    let path = temp_path("corrupt");
    std::fs::write(&path, "{ not json").unwrap();
    let result = load_snapshot(&path);
    std::fs::remove_file(&path).ok();
    assert!(result.is_err());
}
