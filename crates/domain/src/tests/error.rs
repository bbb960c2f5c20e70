// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoachId, DomainError, IdentityFailure};

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidName(String::from("Name cannot be empty"));
    assert_eq!(format!("{err}"), "Invalid name: Name cannot be empty");

    let err: DomainError = DomainError::RosterFull { limit: 20 };
    assert_eq!(format!("{err}"), "Cannot register more than 20 coaches");

    let err: DomainError = DomainError::DuplicateNationalId {
        national_id: String::from("9001011234568"),
    };
    assert_eq!(
        format!("{err}"),
        "A coach with national identity number '9001011234568' is already registered"
    );

    let err: DomainError = DomainError::CoachNotFound {
        coach_id: CoachId::new("c_1"),
    };
    assert_eq!(format!("{err}"), "Coach 'c_1' not found");

    let err: DomainError = DomainError::InvalidNationalId {
        national_id: String::from("123"),
        reason: IdentityFailure::WrongLength,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid national identity number '123': must be exactly 13 digits"
    );

    let err: DomainError = DomainError::InvalidMonthIndex(12);
    assert_eq!(
        format!("{err}"),
        "Invalid month index: 12. Must be between 0 and 11"
    );

    let err: DomainError = DomainError::AmountTooLarge {
        amount: 2_000_000_000_000,
        limit: 1_000_000_000_000,
    };
    assert_eq!(
        format!("{err}"),
        "Amount 2000000000000 exceeds the monthly limit of 1000000000000"
    );
}
