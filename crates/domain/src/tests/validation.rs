// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, expected_dni_letter, format_name, validate_correo, validate_dni,
    validate_full_name,
};

// ============================================================================
// National ID
// ============================================================================

#[test]
fn test_dni_with_correct_letter_is_accepted() {
    assert_eq!(validate_dni("12345678Z").unwrap(), "12345678Z");
    assert_eq!(validate_dni("11111111H").unwrap(), "11111111H");
    assert_eq!(validate_dni("00000000T").unwrap(), "00000000T");
}

#[test]
fn test_dni_with_wrong_letter_is_rejected() {
    let result: Result<String, DomainError> = validate_dni("12345678A");
    assert_eq!(
        result,
        Err(DomainError::WrongDniLetter {
            dni: String::from("12345678A"),
            expected: 'Z',
        })
    );
}

#[test]
fn test_dni_letter_is_normalized_to_uppercase() {
    assert_eq!(validate_dni("12345678z").unwrap(), "12345678Z");
}

#[test]
fn test_dni_with_seven_digits_is_rejected() {
    let result = validate_dni("1234567Z");
    assert!(matches!(result, Err(DomainError::InvalidDni(_))));
}

#[test]
fn test_dni_without_letter_is_rejected() {
    let result = validate_dni("123456789");
    assert!(matches!(result, Err(DomainError::InvalidDni(_))));
}

#[test]
fn test_dni_with_letter_inside_digits_is_rejected() {
    let result = validate_dni("1234A678Z");
    assert!(matches!(result, Err(DomainError::InvalidDni(_))));
}

#[test]
fn test_blank_dni_is_missing() {
    let result = validate_dni("   ");
    assert_eq!(
        result,
        Err(DomainError::Missing {
            field: "national ID"
        })
    );
}

#[test]
fn test_expected_dni_letter_table() {
    assert_eq!(expected_dni_letter(12_345_678), 'Z');
    assert_eq!(expected_dni_letter(0), 'T');
    assert_eq!(expected_dni_letter(1), 'R');
    assert_eq!(expected_dni_letter(22), 'E');
    assert_eq!(expected_dni_letter(23), 'T');
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_valid_emails_are_accepted() {
    assert!(validate_correo("a@b.com").is_ok());
    assert!(validate_correo("ana.garcia@iesalandalus.org").is_ok());
    assert!(validate_correo("luis_2+tutorias@alumnos.es").is_ok());
}

#[test]
fn test_email_without_at_sign_is_rejected() {
    assert!(matches!(
        validate_correo("ana.garcia.iesalandalus.org"),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_with_empty_local_part_is_rejected() {
    assert!(matches!(
        validate_correo("@iesalandalus.org"),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_with_subdomain_is_rejected() {
    assert!(matches!(
        validate_correo("ana@mail.iesalandalus.org"),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_with_long_tld_is_rejected() {
    assert!(matches!(
        validate_correo("ana@iesalandalus.info"),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_email_with_short_tld_is_rejected() {
    assert!(matches!(
        validate_correo("ana@iesalandalus.o"),
        Err(DomainError::InvalidEmail(_))
    ));
}

#[test]
fn test_blank_email_is_missing() {
    assert_eq!(
        validate_correo(""),
        Err(DomainError::Missing { field: "email" })
    );
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn test_format_name_collapses_whitespace_and_capitalizes() {
    assert_eq!(format_name("  juAN   pérez  "), "Juan Pérez");
    assert_eq!(format_name("ÁLVARO\tnúñez"), "Álvaro Núñez");
    assert_eq!(format_name("ana"), "Ana");
}

#[test]
fn test_full_name_requires_two_words() {
    assert!(matches!(
        validate_full_name("Ana"),
        Err(DomainError::InvalidName(_))
    ));
    assert!(validate_full_name("Ana García").is_ok());
}

#[test]
fn test_full_name_rejects_digits() {
    assert!(matches!(
        validate_full_name("Ana G4rcía"),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_blank_full_name_is_missing() {
    assert_eq!(
        validate_full_name(" \t "),
        Err(DomainError::Missing { field: "name" })
    );
}
