//! Per-class advancement data.
//!
//! The table is plain data: one row per (class, level) pair holding the
//! experience threshold and the derived statistics for that level. Hit
//! dice are kept as the rulebook writes them ("2+1", "1*"), since they do
//! not follow one formula across classes.

use serde::Serialize;

use crate::class::CharacterClass;

/// Lowest character level.
pub const MIN_LEVEL: u8 = 1;
/// Highest character level.
pub const MAX_LEVEL: u8 = 10;

/// Derived statistics for one class at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelStats {
    /// Hit dice in rulebook notation.
    pub hit_dice: &'static str,
    /// Attack value.
    pub attack_value: u8,
    /// Saving throw value.
    pub saving_value: u8,
    /// Number of ability slots.
    pub slots: u8,
    /// Number of groups the character may belong to.
    pub groups: u8,
    /// Attribute raises gained at this level, `"-"` at level 1.
    pub raises: &'static str,
}

impl LevelStats {
    /// Used when neither the requested row nor the class's level-1 row exists.
    pub const BASELINE: LevelStats = LevelStats {
        hit_dice: "1",
        attack_value: 10,
        saving_value: 7,
        slots: 1,
        groups: 2,
        raises: "-",
    };
}

/// One entry of the advancement table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancementRow {
    /// Class this row belongs to.
    pub class: CharacterClass,
    /// Level this row describes.
    pub level: u8,
    /// Experience needed to reach this level.
    pub xp: u32,
    /// Statistics at this level.
    pub stats: LevelStats,
}

macro_rules! advancement_rows {
    ($( $class:ident $level:literal => $xp:literal, $hd:literal, $av:literal, $sv:literal, $slots:literal, $groups:literal, $raises:literal; )*) => {
        [$(
            AdvancementRow {
                class: CharacterClass::$class,
                level: $level,
                xp: $xp,
                stats: LevelStats {
                    hit_dice: $hd,
                    attack_value: $av,
                    saving_value: $sv,
                    slots: $slots,
                    groups: $groups,
                    raises: $raises,
                },
            },
        )*]
    };
}

//                         xp      HD      AV  SV  slots groups raises
static WHITEHACK_ROWS: [AdvancementRow; 60] = advancement_rows! {
    Deft 1      =>      0, "1",     10,  7, 1, 2, "-";
    Deft 2      =>   1500, "2",     11,  8, 1, 2, "1";
    Deft 3      =>   3000, "2+1",   11,  9, 2, 3, "1";
    Deft 4      =>   6000, "3",     12, 10, 2, 3, "2";
    Deft 5      =>  12000, "3+1",   12, 11, 3, 4, "2";
    Deft 6      =>  24000, "4",     13, 12, 3, 4, "3";
    Deft 7      =>  48000, "4+1",   13, 13, 4, 5, "3";
    Deft 8      =>  96000, "5",     14, 14, 4, 5, "4";
    Deft 9      => 192000, "5+1",   14, 15, 5, 6, "4";
    Deft 10     => 384000, "6",     15, 16, 5, 6, "5";

    Strong 1    =>      0, "1+2",   11,  5, 1, 2, "-";
    Strong 2    =>   2000, "2",     12,  6, 1, 2, "1";
    Strong 3    =>   4000, "3",     12,  7, 2, 2, "1";
    Strong 4    =>   8000, "4",     13,  8, 2, 3, "2";
    Strong 5    =>  16000, "5",     14,  9, 2, 3, "2";
    Strong 6    =>  32000, "6",     14, 10, 3, 3, "3";
    Strong 7    =>  64000, "7",     15, 11, 3, 4, "3";
    Strong 8    => 128000, "8",     16, 12, 3, 4, "4";
    Strong 9    => 256000, "9",     16, 13, 4, 4, "4";
    Strong 10   => 512000, "10",    17, 14, 4, 5, "5";

    Wise 1      =>      0, "1+1",   10,  6, 1, 2, "-";
    Wise 2      =>   2500, "2",     11,  7, 2, 2, "1";
    Wise 3      =>   5000, "2+1",   11,  8, 2, 3, "1";
    Wise 4      =>  10000, "3",     11,  9, 3, 3, "2";
    Wise 5      =>  20000, "3+1",   12, 10, 3, 4, "2";
    Wise 6      =>  40000, "4",     12, 11, 4, 4, "3";
    Wise 7      =>  80000, "4+1",   12, 12, 4, 5, "3";
    Wise 8      => 160000, "5",     13, 13, 5, 5, "4";
    Wise 9      => 320000, "5+1",   13, 14, 5, 6, "4";
    Wise 10     => 640000, "6",     13, 15, 6, 6, "5";

    Brave 1     =>      0, "1*",    10,  7, 1, 2, "-";
    Brave 2     =>   1750, "2*",    11,  8, 1, 2, "1";
    Brave 3     =>   3500, "2+1*",  11,  9, 2, 2, "1";
    Brave 4     =>   7000, "3*",    12, 10, 2, 3, "2";
    Brave 5     =>  14000, "3+1*",  12, 11, 2, 3, "2";
    Brave 6     =>  28000, "4*",    13, 12, 3, 3, "3";
    Brave 7     =>  56000, "4+1*",  13, 13, 3, 4, "3";
    Brave 8     => 112000, "5*",    14, 14, 3, 4, "4";
    Brave 9     => 224000, "5+1*",  14, 15, 4, 4, "4";
    Brave 10    => 448000, "6*",    15, 16, 4, 5, "5";

    Clever 1    =>      0, "1",     10,  7, 1, 2, "-";
    Clever 2    =>   2000, "2",     10,  8, 1, 2, "1";
    Clever 3    =>   4000, "2+1",   11,  9, 2, 3, "1";
    Clever 4    =>   8000, "3",     11, 10, 2, 3, "2";
    Clever 5    =>  16000, "3+1",   12, 11, 3, 4, "2";
    Clever 6    =>  32000, "4",     12, 12, 3, 4, "3";
    Clever 7    =>  64000, "4+1",   13, 13, 4, 5, "3";
    Clever 8    => 128000, "5",     13, 14, 4, 5, "4";
    Clever 9    => 256000, "5+1",   14, 15, 5, 6, "4";
    Clever 10   => 512000, "6",     14, 16, 5, 6, "5";

    Fortunate 1  =>      0, "1",    10,  7, 1, 2, "-";
    Fortunate 2  =>   1750, "1+1",  10,  8, 1, 2, "1";
    Fortunate 3  =>   3500, "2",    11,  9, 1, 3, "1";
    Fortunate 4  =>   7000, "2+1",  11, 10, 2, 3, "2";
    Fortunate 5  =>  14000, "3",    12, 11, 2, 4, "2";
    Fortunate 6  =>  28000, "3+1",  12, 12, 2, 4, "3";
    Fortunate 7  =>  56000, "4",    13, 13, 3, 5, "3";
    Fortunate 8  => 112000, "4+1",  13, 14, 3, 5, "4";
    Fortunate 9  => 224000, "5",    14, 15, 3, 6, "4";
    Fortunate 10 => 448000, "5+1",  14, 16, 4, 6, "5";
};

/// A read-only advancement table.
///
/// [`AdvancementTable::whitehack`] returns the full rulebook table; other
/// row sets can be supplied with [`AdvancementTable::from_rows`]. Every
/// lookup is total: a missing row falls back rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct AdvancementTable {
    rows: &'static [AdvancementRow],
}

impl Default for AdvancementTable {
    fn default() -> Self {
        Self::whitehack()
    }
}

impl AdvancementTable {
    /// The complete table for all six classes and levels 1 through 10.
    pub fn whitehack() -> Self {
        Self {
            rows: &WHITEHACK_ROWS,
        }
    }

    /// A table over an arbitrary set of rows.
    pub fn from_rows(rows: &'static [AdvancementRow]) -> Self {
        Self { rows }
    }

    /// All rows in the table.
    pub fn rows(&self) -> &'static [AdvancementRow] {
        self.rows
    }

    fn row(&self, class: CharacterClass, level: u8) -> Option<&'static AdvancementRow> {
        self.rows
            .iter()
            .find(|r| r.class == class && r.level == level)
    }

    /// Statistics for a class at a level.
    ///
    /// The level is clamped to 1..=10. If the row is missing, the class's
    /// level-1 row is used, then [`LevelStats::BASELINE`].
    pub fn stats_for_level(&self, class: CharacterClass, level: i64) -> LevelStats {
        let level = clamp_level(level, MIN_LEVEL);
        self.row(class, level)
            .or_else(|| self.row(class, MIN_LEVEL))
            .map(|r| r.stats)
            .unwrap_or(LevelStats::BASELINE)
    }

    /// Experience needed to reach `target_level`.
    ///
    /// The target is clamped to 2..=10, since level 1 needs no experience.
    /// Returns 0 if the table has no row for the pair.
    pub fn xp_requirement(&self, class: CharacterClass, target_level: i64) -> u32 {
        let level = clamp_level(target_level, MIN_LEVEL + 1);
        self.row(class, level).map(|r| r.xp).unwrap_or(0)
    }

    /// The highest level whose threshold `xp` meets, in 1..=10.
    pub fn level_for_xp(&self, class: CharacterClass, xp: i64) -> u8 {
        if xp <= 0 {
            return MIN_LEVEL;
        }
        (MIN_LEVEL + 1..=MAX_LEVEL)
            .rev()
            .find(|&level| {
                self.row(class, level)
                    .is_some_and(|r| i64::from(r.xp) <= xp)
            })
            .unwrap_or(MIN_LEVEL)
    }
}

fn clamp_level(level: i64, min: u8) -> u8 {
    // Bounded by MAX_LEVEL, so the narrowing cast is lossless.
    level.clamp(i64::from(min), i64::from(MAX_LEVEL)) as u8
}

/// [`AdvancementTable::stats_for_level`] on the rulebook table.
pub fn stats_for_level(class: CharacterClass, level: i64) -> LevelStats {
    AdvancementTable::whitehack().stats_for_level(class, level)
}

/// [`AdvancementTable::xp_requirement`] on the rulebook table.
pub fn xp_requirement(class: CharacterClass, target_level: i64) -> u32 {
    AdvancementTable::whitehack().xp_requirement(class, target_level)
}

/// [`AdvancementTable::level_for_xp`] on the rulebook table.
pub fn level_for_xp(class: CharacterClass, xp: i64) -> u8 {
    AdvancementTable::whitehack().level_for_xp(class, xp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn table_is_fully_populated() {
        let table = AdvancementTable::whitehack();
        for class in CharacterClass::ALL {
            for level in MIN_LEVEL..=MAX_LEVEL {
                let count = table
                    .rows()
                    .iter()
                    .filter(|r| r.class == class && r.level == level)
                    .count();
                assert_eq!(count, 1, "{class} level {level}");
            }
        }
    }

    #[test]
    fn raises_dash_only_at_level_one() {
        for class in CharacterClass::ALL {
            assert_eq!(stats_for_level(class, 1).raises, "-");
            for level in 2..=10 {
                assert_ne!(
                    stats_for_level(class, level).raises,
                    "-",
                    "{class} level {level}"
                );
            }
        }
    }

    #[test]
    fn stats_clamp_level() {
        assert_eq!(
            stats_for_level(CharacterClass::Strong, 0),
            stats_for_level(CharacterClass::Strong, 1)
        );
        assert_eq!(
            stats_for_level(CharacterClass::Strong, -5),
            stats_for_level(CharacterClass::Strong, 1)
        );
        assert_eq!(
            stats_for_level(CharacterClass::Wise, 99),
            stats_for_level(CharacterClass::Wise, 10)
        );
    }

    #[test]
    fn irregular_hit_dice_notation() {
        assert_eq!(stats_for_level(CharacterClass::Deft, 3).hit_dice, "2+1");
        assert_eq!(stats_for_level(CharacterClass::Brave, 1).hit_dice, "1*");
        assert_eq!(stats_for_level(CharacterClass::Strong, 1).hit_dice, "1+2");
    }

    static PARTIAL_ROWS: [AdvancementRow; 2] = advancement_rows! {
        Wise 1 => 0, "1+1", 10, 6, 1, 2, "-";
        Wise 2 => 2500, "2", 11, 7, 2, 2, "1";
    };

    #[test]
    fn missing_row_falls_back_to_level_one() {
        let table = AdvancementTable::from_rows(&PARTIAL_ROWS);
        let stats = table.stats_for_level(CharacterClass::Wise, 7);
        assert_eq!(stats, PARTIAL_ROWS[0].stats);
    }

    #[test]
    fn missing_class_falls_back_to_baseline() {
        let table = AdvancementTable::from_rows(&PARTIAL_ROWS);
        let stats = table.stats_for_level(CharacterClass::Deft, 4);
        assert_eq!(stats, LevelStats::BASELINE);
        assert_eq!(stats.hit_dice, "1");
        assert_eq!(stats.attack_value, 10);
        assert_eq!(stats.saving_value, 7);
        assert_eq!(stats.slots, 1);
        assert_eq!(stats.groups, 2);
        assert_eq!(stats.raises, "-");
    }

    #[test]
    fn xp_requirement_missing_pair_is_zero() {
        let table = AdvancementTable::from_rows(&PARTIAL_ROWS);
        assert_eq!(table.xp_requirement(CharacterClass::Wise, 2), 2500);
        assert_eq!(table.xp_requirement(CharacterClass::Wise, 3), 0);
        assert_eq!(table.xp_requirement(CharacterClass::Brave, 2), 0);
    }

    #[test]
    fn xp_requirement_clamps_target() {
        assert_eq!(
            xp_requirement(CharacterClass::Deft, 1),
            xp_requirement(CharacterClass::Deft, 2)
        );
        assert_eq!(
            xp_requirement(CharacterClass::Deft, 50),
            xp_requirement(CharacterClass::Deft, 10)
        );
        assert_eq!(xp_requirement(CharacterClass::Deft, 2), 1500);
    }

    #[test]
    fn xp_requirement_strictly_increases() {
        for class in CharacterClass::ALL {
            for level in 3..=10 {
                assert!(
                    xp_requirement(class, level) > xp_requirement(class, level - 1),
                    "{class} level {level}"
                );
            }
        }
    }

    #[test]
    fn level_for_xp_thresholds() {
        assert_eq!(level_for_xp(CharacterClass::Deft, 0), 1);
        assert_eq!(level_for_xp(CharacterClass::Deft, -100), 1);
        assert_eq!(level_for_xp(CharacterClass::Deft, 1499), 1);
        assert_eq!(level_for_xp(CharacterClass::Deft, 1500), 2);
        assert_eq!(level_for_xp(CharacterClass::Deft, 5999), 3);
        assert_eq!(level_for_xp(CharacterClass::Deft, 384_000), 10);
        assert_eq!(level_for_xp(CharacterClass::Deft, 10_000_000), 10);
    }

    #[test]
    fn level_for_xp_on_partial_table() {
        let table = AdvancementTable::from_rows(&PARTIAL_ROWS);
        assert_eq!(table.level_for_xp(CharacterClass::Wise, 100_000), 2);
        assert_eq!(table.level_for_xp(CharacterClass::Deft, 100_000), 1);
    }

    #[test]
    fn level_for_xp_inverts_requirement() {
        for class in CharacterClass::ALL {
            for level in 2..=10u8 {
                let xp = i64::from(xp_requirement(class, i64::from(level)));
                assert_eq!(level_for_xp(class, xp), level);
                assert_eq!(level_for_xp(class, xp - 1), level - 1);
            }
        }
    }

    fn any_class() -> impl Strategy<Value = CharacterClass> {
        prop::sample::select(CharacterClass::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn level_for_xp_is_non_decreasing(
            class in any_class(),
            a in -1_000i64..1_000_000,
            b in -1_000i64..1_000_000,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(level_for_xp(class, lo) <= level_for_xp(class, hi));
        }

        #[test]
        fn level_for_xp_in_range(class in any_class(), xp in any::<i64>()) {
            let level = level_for_xp(class, xp);
            prop_assert!((MIN_LEVEL..=MAX_LEVEL).contains(&level));
        }

        #[test]
        fn stats_total_for_any_level(class in any_class(), level in any::<i64>()) {
            let stats = stats_for_level(class, level);
            prop_assert!(!stats.hit_dice.is_empty());
        }
    }
}
