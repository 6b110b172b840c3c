// SPDX-License-Identifier: GPL-3.0-only

use storage_types::{OptionAction, OptionChange};

use super::directive::parse_directive;
use super::options::OptionSet;
use crate::error::ParseError;

impl OptionSet {
    /// Apply changes strictly in order; later changes to a key win.
    pub fn apply(&mut self, changes: &[OptionChange]) {
        for change in changes {
            match change.action {
                OptionAction::Add => self.set(change.key.clone(), change.value.clone()),
                OptionAction::Remove => {
                    self.remove(&change.key);
                }
            }
        }
    }
}

/// Merge a directive into an existing option field and re-encode it.
///
/// Fails without partial output if either side does not parse.
pub fn merge_options(existing: &str, directive: &str) -> Result<String, ParseError> {
    let mut set: OptionSet = existing.parse()?;
    let changes = parse_directive(directive)?;
    tracing::debug!(
        changes = changes.len(),
        "merging directive into option field {existing}"
    );
    set.apply(&changes);
    Ok(set.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(existing: &str, directive: &str) -> String {
        merge_options(existing, directive).expect("merge should succeed")
    }

    #[test]
    fn empty_directive_is_a_no_op() {
        assert_eq!(merge("rw,uid=1000,noexec", ""), "rw,uid=1000,noexec");
    }

    #[test]
    fn update_keeps_position() {
        assert_eq!(merge("a=1,b=2", "+a=9"), "a=9,b=2");
    }

    #[test]
    fn new_keys_append_in_directive_order() {
        assert_eq!(merge("a=1", "+c=3"), "a=1,c=3");
        assert_eq!(merge("a=1", "+z y +x"), "a=1,z,y,x");
    }

    #[test]
    fn flags_and_values_mix() {
        assert_eq!(
            merge("nodev,noauto", "-noauto +nosuid +truc=bidule"),
            "nodev,nosuid,truc=bidule"
        );
    }

    #[test]
    fn flag_can_gain_and_lose_a_value_in_place() {
        assert_eq!(merge("a,b", "+a=1"), "a=1,b");
        assert_eq!(merge("a=1,b", "a"), "a,b");
    }

    #[test]
    fn removing_absent_key_is_a_no_op() {
        assert_eq!(merge("defaults", "-noauto"), "defaults");
    }

    #[test]
    fn removal_is_idempotent() {
        let once = merge("a,k=1,b", "-k");
        assert_eq!(merge(&once, "-k"), once);
        assert_eq!(once, "a,b");
    }

    #[test]
    fn later_changes_override_earlier_ones() {
        assert_eq!(merge("a", "+k=1 +k=2"), "a,k=2");
        assert_eq!(merge("a", "+k -k"), "a");
        assert_eq!(merge("a", "-a +a"), "a");
    }

    #[test]
    fn removed_then_readded_key_moves_to_end() {
        assert_eq!(merge("a,b,c", "-a +a"), "b,c,a");
    }

    #[test]
    fn removing_every_option_yields_empty_field() {
        assert_eq!(merge("a,b", "-a -b"), "");
    }

    #[test]
    fn malformed_existing_field_fails() {
        assert_eq!(
            merge_options("a=b=c", "+x"),
            Err(ParseError::OptionNotUnderstood {
                option: "a=b=c".to_string()
            })
        );
    }

    #[test]
    fn malformed_directive_fails() {
        assert!(matches!(
            merge_options("a", "+x=1=2"),
            Err(ParseError::ChangeNotUnderstood { .. })
        ));
    }
}
