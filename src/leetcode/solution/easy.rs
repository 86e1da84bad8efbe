pub mod n0020 {
    /// Every closer must match the most recent unmatched opener.
    /// Characters other than `()[]{}` make the string invalid.
    pub fn is_valid(s: &str) -> bool {
        let mut stack = Vec::with_capacity(s.len());
        for c in s.chars() {
            let need = match c {
                ')' => '(',
                ']' => '[',
                '}' => '{',
                '(' | '[' | '{' => {
                    stack.push(c);
                    continue;
                }
                _ => return false,
            };
            // an empty stack means there is nothing left to close
            if stack.pop() != Some(need) {
                return false;
            }
        }
        stack.is_empty()
    }
}

pub mod n0027 {
    /// Moves every element not equal to `val` to the front, keeping their
    /// order, and returns how many there are. The tail is left unspecified.
    pub fn remove_element<T: PartialEq>(nums: &mut [T], val: &T) -> usize {
        let mut k = 0;
        for i in 0..nums.len() {
            if nums[i] != *val {
                nums.swap(k, i);
                k += 1;
            }
        }
        k
    }
}

pub mod n2379 {
    use tracing::debug;

    use crate::algo::window::{fixed_windows, CountMatching};
    use crate::error::{Result, WindowError};

    /// Fewest white blocks to repaint so that some run of `k` blocks is all black.
    pub fn minimum_recolors(blocks: &str, k: usize) -> Result<usize> {
        if let Some(c) = blocks.chars().find(|&c| c != 'W' && c != 'B') {
            debug!(?c, "unexpected block colour");
            return Err(WindowError::InvalidArgument(format!(
                "blocks may only contain 'W' and 'B', found {:?}",
                c
            )));
        }
        let mut res = blocks.len();
        fixed_windows(blocks.as_bytes(), k, CountMatching::new(b'W'), |white, _, _| {
            res = res.min(white.count())
        })?;
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{n0020::is_valid, n0027::remove_element, n2379::minimum_recolors};
    use crate::error::WindowError;

    #[test]
    fn n0020() {
        assert!(is_valid(""));
        assert!(is_valid("()"));
        assert!(is_valid("()[]{}"));
        assert!(is_valid("{[()]}"));
        assert!(!is_valid("(]"));
        assert!(!is_valid("([)]"));
        assert!(!is_valid("(("));
        assert!(!is_valid(")"));
        assert!(!is_valid("]()"));
        assert!(!is_valid("(a)"));
    }

    #[test]
    fn n0027() {
        let mut nums = vec![3, 2, 2, 3];
        let k = remove_element(&mut nums, &3);
        assert_eq!(k, 2);
        assert_eq!(&nums[..k], &[2, 2]);

        let mut nums = vec![0, 1, 2, 2, 3, 0, 4, 2];
        let k = remove_element(&mut nums, &2);
        assert_eq!(&nums[..k], &[0, 1, 3, 0, 4]);

        let mut empty: Vec<i32> = vec![];
        assert_eq!(remove_element(&mut empty, &1), 0);
    }

    #[test]
    fn n2379() {
        assert_eq!(minimum_recolors("WBBWWBBWBW", 7), Ok(3));
        assert_eq!(minimum_recolors("WBWBBBW", 2), Ok(0));
        assert_eq!(minimum_recolors("WWW", 3), Ok(3));
        assert_eq!(
            minimum_recolors("WB", 3),
            Err(WindowError::InvalidWidth { width: 3, len: 2 })
        );
        assert!(matches!(
            minimum_recolors("WXB", 1),
            Err(WindowError::InvalidArgument(_))
        ));
    }

    fn balanced() -> impl Strategy<Value = String> {
        let leaf = Just(String::new());
        leaf.prop_recursive(4, 64, 3, |inner| {
            prop_oneof![
                (inner.clone(), prop::sample::select(vec![('(', ')'), ('[', ']'), ('{', '}')]))
                    .prop_map(|(s, (o, c))| format!("{}{}{}", o, s, c)),
                (inner.clone(), inner).prop_map(|(a, b)| a + &b),
            ]
        })
    }

    proptest! {
        #[test]
        fn balanced_strings_are_valid(s in balanced()) {
            prop_assert!(is_valid(&s));
        }

        #[test]
        fn dropping_one_bracket_breaks_balance(s in balanced(), i in any::<prop::sample::Index>()) {
            prop_assume!(!s.is_empty());
            let mut broken = s.clone();
            broken.remove(i.index(s.len()));
            prop_assert!(!is_valid(&broken));
        }

        #[test]
        fn compaction_keeps_order(
            nums in prop::collection::vec(0i32..5, 0..30),
            val in 0i32..5,
        ) {
            let expected: Vec<i32> = nums.iter().copied().filter(|&x| x != val).collect();
            let mut work = nums.clone();
            let k = remove_element(&mut work, &val);
            prop_assert_eq!(k, expected.len());
            prop_assert_eq!(&work[..k], &expected[..]);
        }
    }
}
