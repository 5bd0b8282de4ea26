/// Asserts that the pond holds exactly the given number of individuals.
#[macro_export]
macro_rules! assert_population {
    ($pond:expr, $count:expr) => {
        assert_eq!($pond.count(), $count, "Population count mismatch");
    };
}

/// Asserts that an individual with the given ID is no longer in the pond.
#[macro_export]
macro_rules! assert_individual_gone {
    ($pond:expr, $id:expr) => {
        assert!(
            $pond.find($id).is_none(),
            "Individual {} should be gone but was found",
            $id
        );
    };
}

/// Asserts that every invariant the engine maintains holds for a pond.
#[macro_export]
macro_rules! assert_pond_consistent {
    ($engine:expr, $pond:expr) => {
        let pond = &$pond;
        if pond.built {
            assert!(
                pond.count() <= $engine.capacity(pond),
                "Population {} exceeds capacity",
                pond.count()
            );
        }
        assert!(
            (0.0..=100.0).contains(&pond.water_quality),
            "Water quality {} out of range",
            pond.water_quality
        );
        for individual in &pond.individuals {
            assert!(individual.genes.in_bounds(), "Genes out of bounds: {:?}", individual.genes);
        }
        if let Some(pair) = &pond.breeding_pair {
            assert_ne!(pair.parent_a, pair.parent_b);
            assert!(pond.find(pair.parent_a).is_some(), "Dangling breeding parent");
            assert!(pond.find(pair.parent_b).is_some(), "Dangling breeding parent");
        }
    };
}
