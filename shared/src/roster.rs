use crate::models::Contestant;
use crate::random::RandomSource;

/// Fixed seed roster, order significant for display.
pub fn seed_contestants() -> Vec<Contestant> {
    vec![
        Contestant {
            id: "1".into(),
            name: "Sarah Chen".into(),
            category: "Singer".into(),
            image: "https://images.unsplash.com/photo-1526170375885-4d8ecf77b99f?w=400&h=300&fit=crop".into(),
            votes: 1247,
            description: "A soulful singer with a powerful voice that moves audiences to tears.".into(),
        },
        Contestant {
            id: "2".into(),
            name: "Marcus Rodriguez".into(),
            category: "Dancer".into(),
            image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=300&fit=crop".into(),
            votes: 892,
            description: "An innovative dancer blending street dance with classical ballet.".into(),
        },
        Contestant {
            id: "3".into(),
            name: "The Amazing Duo".into(),
            category: "Magic Act".into(),
            image: "https://images.unsplash.com/photo-1549576490-b0b4831ef60a?w=400&h=300&fit=crop".into(),
            votes: 1456,
            description: "Mind-bending illusions that challenge the laws of physics.".into(),
        },
        Contestant {
            id: "4".into(),
            name: "Emma Thompson".into(),
            category: "Comedian".into(),
            image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=300&fit=crop".into(),
            votes: 723,
            description: "Quick-witted comedy that finds humor in everyday life.".into(),
        },
        Contestant {
            id: "5".into(),
            name: "Phoenix Acrobats".into(),
            category: "Acrobatic Group".into(),
            image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=400&h=300&fit=crop".into(),
            votes: 1089,
            description: "Death-defying stunts performed with grace and precision.".into(),
        },
        Contestant {
            id: "6".into(),
            name: "Melody Rivers".into(),
            category: "Pianist".into(),
            image: "https://images.unsplash.com/photo-1531123897727-8f129e1688ce?w=400&h=300&fit=crop".into(),
            votes: 654,
            description: "Classical pianist who brings new life to timeless compositions.".into(),
        },
    ]
}

/// Simulated live activity: bumps every tally by an independent uniform
/// delta in `0..range`, leaving all other fields untouched. Display-only;
/// persisted per-user vote records are not involved.
pub fn apply_live_update(contestants: &mut [Contestant], rng: &mut dyn RandomSource, range: u32) {
    for contestant in contestants {
        contestant.votes += rng.delta(range);
    }
}
