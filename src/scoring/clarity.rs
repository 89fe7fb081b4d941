//! Answer-length clarity signal
//!
//! A crude proxy for communication quality: 0 = too terse, 1 = adequate,
//! 2 = elaborated. Deliberately simple; it only feeds the soft-skill
//! narrative, never the hard-skill score.

use crate::core::config::{CLARITY_ADEQUATE_CHARS, CLARITY_TERSE_CHARS};

/// Clarity vote for one answer, by trimmed character count
pub fn estimate_clarity(answer: &str) -> u8 {
    let len = answer.trim().chars().count();
    if len < CLARITY_TERSE_CHARS {
        0
    } else if len < CLARITY_ADEQUATE_CHARS {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terse_answer() {
        assert_eq!(estimate_clarity("да"), 0);
        assert_eq!(estimate_clarity("   не помню   "), 0);
    }

    #[test]
    fn test_adequate_answer() {
        assert_eq!(estimate_clarity("INNER JOIN возвращает только совпавшие строки."), 1);
    }

    #[test]
    fn test_elaborated_answer() {
        let long = "INNER JOIN возвращает только совпавшие строки. \
                    LEFT JOIN возвращает все строки из левой таблицы плюс совпадения справа, \
                    иначе NULL. LEFT JOIN нужен, чтобы получить всех пользователей без заказов.";
        assert_eq!(estimate_clarity(long), 2);
    }

    #[test]
    fn test_boundaries_count_chars_not_bytes() {
        // 24 Cyrillic chars = 48 bytes; still below the terse threshold
        let s = "а".repeat(24);
        assert_eq!(estimate_clarity(&s), 0);
        let s = "а".repeat(25);
        assert_eq!(estimate_clarity(&s), 1);
        let s = "а".repeat(119);
        assert_eq!(estimate_clarity(&s), 1);
        let s = "а".repeat(120);
        assert_eq!(estimate_clarity(&s), 2);
    }
}
