/// Tests for value formatting
///
/// These pin down the display contract: placeholders for missing values,
/// digit grouping, and the 10-digit phone rule.

#[cfg(test)]
mod tests {
    use crate::format::*;
    use crate::types::Property;

    #[test]
    fn test_format_price_grouped() {
        assert_eq!(format_price(Some(500000.0)), "$500,000");
        assert_eq!(format_price(Some(1250000.0)), "$1,250,000");
        assert_eq!(format_price(Some(950.0)), "$950");
    }

    #[test]
    fn test_format_price_rounds_to_whole_dollars() {
        assert_eq!(format_price(Some(433333.333)), "$433,333");
        assert_eq!(format_price(Some(433333.5)), "$433,334");
    }

    #[test]
    fn test_format_price_unavailable() {
        assert_eq!(format_price(None), "Price N/A");
        assert_eq!(format_price(Some(0.0)), "Price N/A");
    }

    #[test]
    fn test_format_phone_ten_digits() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123 4567"), "(555) 123-4567");
    }

    #[test]
    fn test_format_phone_other_lengths_verbatim() {
        assert_eq!(format_phone("123"), "123");
        assert_eq!(format_phone("+1 555 123 4567"), "+1 555 123 4567");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_format_address_joins_present_parts() {
        let property = Property {
            address_line1: Some("12 Oak St".to_string()),
            city: Some("Madison".to_string()),
            state: Some("WI".to_string()),
            zip_code: Some("53703".to_string()),
            ..Default::default()
        };
        assert_eq!(format_address(&property), "12 Oak St, Madison, WI, 53703");
    }

    #[test]
    fn test_format_address_skips_missing_and_empty_parts() {
        let property = Property {
            address_line1: Some("12 Oak St".to_string()),
            city: Some(String::new()),
            state: Some("WI".to_string()),
            ..Default::default()
        };
        assert_eq!(format_address(&property), "12 Oak St, WI");
    }

    #[test]
    fn test_format_address_fallback() {
        assert_eq!(format_address(&Property::default()), "Address not available");
    }

    #[test]
    fn test_format_sqft() {
        assert_eq!(format_sqft(Some(1850.0)), "1,850");
        assert_eq!(format_sqft(Some(980.0)), "980");
        assert_eq!(format_sqft(None), "--");
        assert_eq!(format_sqft(Some(0.0)), "--");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(3)), "3");
        assert_eq!(format_count(Some(0)), "--");
        assert_eq!(format_count(None), "--");
    }

    #[test]
    fn test_format_date_variants() {
        assert_eq!(format_date(Some("2024-06-01")), "6/1/2024");
        assert_eq!(format_date(Some("2024-12-25T18:30:00Z")), "12/25/2024");
        assert_eq!(format_date(Some("soon")), "N/A");
        assert_eq!(format_date(None), "N/A");
    }
}
