//! Unit tests for the fixed skill list and bar fill timing.

use portfolio::profile::{Level, SKILLS};
use portfolio::ui::animation::BarStagger;

#[test]
fn test_skills_fixed_order_and_levels() {
    let names: Vec<&str> = SKILLS.iter().map(|s| s.name).collect();
    let levels: Vec<u8> = SKILLS.iter().map(|s| s.level.percent()).collect();

    assert_eq!(
        names,
        ["JavaScript", "React", "Next.js", "Tailwind CSS", "TypeScript", "Node.js"]
    );
    assert_eq!(levels, [90, 85, 80, 75, 70, 65]);
}

#[test]
fn test_skill_levels_within_range() {
    for skill in SKILLS.iter() {
        assert!(skill.level.percent() <= Level::MAX, "{} out of range", skill.name);
    }
}

#[test]
fn test_stagger_delay_monotonic_and_non_negative() {
    let stagger = BarStagger::default();
    let mut previous = 0.0;
    for index in 0..SKILLS.len() {
        let delay = stagger.tween(index).delay;
        assert!(delay >= 0.0);
        assert!(delay >= previous);
        previous = delay;
    }
    assert!((stagger.tween(0).delay - 0.5).abs() < 1e-9);
    assert!((stagger.tween(3).delay - 0.8).abs() < 1e-9);
}

#[test]
fn test_bar_fill_progression() {
    let stagger = BarStagger::default();
    let target = SKILLS[2].level.fraction();

    // Bar 2 starts at 0.7s and finishes at 1.7s
    assert_eq!(stagger.fill(2, target, 0.7), 0.0);
    let mut last = 0.0;
    for step in 0..=20 {
        let t = 0.7 + step as f64 * 0.05;
        let fill = stagger.fill(2, target, t);
        assert!(fill >= last);
        last = fill;
    }
    assert!((stagger.fill(2, target, 1.7) - 0.8).abs() < 1e-6);
    assert!((stagger.fill(2, target, 5.0) - 0.8).abs() < 1e-6);
}
