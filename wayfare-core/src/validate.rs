use wayfare_shared::NewTripRequest;

use crate::{CoreError, CoreResult};

/// Form rules for creating a trip record. These mirror what the trip
/// creation screen enforces before a record ever reaches a repository.
pub fn validate_new_trip(request: &NewTripRequest) -> CoreResult<()> {
    if request.title.trim().chars().count() < 3 {
        return Err(CoreError::ValidationError(
            "Title must be at least 3 characters".to_string(),
        ));
    }

    if request.destination.trim().chars().count() < 2 {
        return Err(CoreError::ValidationError(
            "Please enter a destination".to_string(),
        ));
    }

    if request.end_date < request.start_date {
        return Err(CoreError::ValidationError(
            "End date must not be before the start date".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wayfare_shared::DestinationKind;

    fn request(title: &str, destination: &str, start: &str, end: &str) -> NewTripRequest {
        NewTripRequest {
            title: title.to_string(),
            destination: destination.to_string(),
            destination_kind: DestinationKind::Country,
            start_date: start.parse::<NaiveDate>().unwrap(),
            end_date: end.parse::<NaiveDate>().unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request("Bali Getaway", "Indonesia", "2023-12-10", "2023-12-20");
        assert!(validate_new_trip(&req).is_ok());
    }

    #[test]
    fn test_short_title_rejected() {
        let req = request("Ba", "Indonesia", "2023-12-10", "2023-12-20");
        assert!(matches!(
            validate_new_trip(&req),
            Err(CoreError::ValidationError(_))
        ));
    }

    #[test]
    fn test_short_destination_rejected() {
        let req = request("Bali Getaway", "I", "2023-12-10", "2023-12-20");
        assert!(validate_new_trip(&req).is_err());
    }

    #[test]
    fn test_inverted_date_range_rejected() {
        let req = request("Bali Getaway", "Indonesia", "2023-12-20", "2023-12-10");
        assert!(validate_new_trip(&req).is_err());
    }
}
