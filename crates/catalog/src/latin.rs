//! Latin folding of Vietnamese (and general Latin-1) diacritic script.
//!
//! Two consumers share this table: the transliteration collaborator that
//! derives `name_latin` fields, and the primary-strength ("en", strength 1)
//! collation used for uniqueness comparisons, which treats case and accents
//! as equal.

/// Fold one character to its latin-equivalent ASCII base, preserving case.
///
/// Characters outside the table pass through unchanged.
pub fn fold_char(c: char) -> char {
    match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ'
        | 'ẩ' | 'ẫ' | 'ậ' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Ả' | 'Ã' | 'Ạ' | 'Ă' | 'Ằ' | 'Ắ' | 'Ẳ' | 'Ẵ' | 'Ặ' | 'Â' | 'Ầ' | 'Ấ'
        | 'Ẩ' | 'Ẫ' | 'Ậ' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' | 'ë' => 'e',
        'È' | 'É' | 'Ẻ' | 'Ẽ' | 'Ẹ' | 'Ê' | 'Ề' | 'Ế' | 'Ể' | 'Ễ' | 'Ệ' | 'Ë' => 'E',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' | 'î' | 'ï' => 'i',
        'Ì' | 'Í' | 'Ỉ' | 'Ĩ' | 'Ị' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ'
        | 'ở' | 'ỡ' | 'ợ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ỏ' | 'Õ' | 'Ọ' | 'Ô' | 'Ồ' | 'Ố' | 'Ổ' | 'Ỗ' | 'Ộ' | 'Ơ' | 'Ờ' | 'Ớ'
        | 'Ở' | 'Ỡ' | 'Ợ' | 'Ö' => 'O',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Ủ' | 'Ũ' | 'Ụ' | 'Ư' | 'Ừ' | 'Ứ' | 'Ử' | 'Ữ' | 'Ự' | 'Û' | 'Ü' => 'U',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' | 'ÿ' => 'y',
        'Ỳ' | 'Ý' | 'Ỷ' | 'Ỹ' | 'Ỵ' => 'Y',
        'đ' => 'd',
        'Đ' => 'D',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        other => other,
    }
}

/// Fold a whole string, preserving case. Deterministic and total.
pub fn fold(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Collation key under locale "en", strength "primary": case- and
/// accent-insensitive. Two strings with the same key count as duplicates
/// for slug uniqueness.
pub fn collation_key(text: &str) -> String {
    fold(text).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_vietnamese_names() {
        assert_eq!(fold("Nguyễn"), "Nguyen");
        assert_eq!(fold("Trần Thị Thu Hằng"), "Tran Thi Thu Hang");
        assert_eq!(fold("Điện Biên Phủ"), "Dien Bien Phu");
    }

    #[test]
    fn fold_is_deterministic_and_ascii_stable() {
        assert_eq!(fold("Nguyễn"), fold("Nguyễn"));
        assert_eq!(fold("plain ascii 123"), "plain ascii 123");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn collation_key_equates_case_and_accents() {
        assert_eq!(collation_key("Son Môi Đỏ"), collation_key("son moi do"));
        assert_ne!(collation_key("son moi do"), collation_key("son moi dom"));
    }
}
