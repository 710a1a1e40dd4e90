use std::fmt::Display;

/// Renders `name = value` pairs behind `prefix`.
///
/// Pairs are joined with `", "`, or one per line (each line starting with
/// `prefix`) when `use_linefeed` is set.
#[must_use]
pub fn members_to_string(
    prefix: &str,
    members: &[(&str, &dyn Display)],
    use_linefeed: bool,
) -> String {
    let mut out = String::from(prefix);
    for (i, (name, value)) in members.iter().enumerate() {
        if i > 0 {
            if use_linefeed {
                out.push('\n');
                out.push_str(prefix);
            } else {
                out.push_str(", ");
            }
        }
        out.push_str(&format!("{name} = {value}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Pos3D;

    #[test]
    fn single_line() {
        let pos = Pos3D::new(1, 2, 3);
        let s = members_to_string("> ", &[("pos", &pos), ("speed", &1.5)], false);
        assert_eq!(s, "> pos = 1, 2, 3, speed = 1.5");
    }

    #[test]
    fn one_member_per_line() {
        let s = members_to_string("  ", &[("a", &1), ("b", &"two")], true);
        assert_eq!(s, "  a = 1\n  b = two");
    }

    #[test]
    fn no_members() {
        assert_eq!(members_to_string("x", &[], true), "x");
    }
}
