// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;

/// Check letters for Spanish national IDs, indexed by the number modulo 23.
const LETRAS_DNI: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

/// Returns the trimmed value, or an absence error when nothing was supplied.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the value is empty or only whitespace.
pub fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Missing { field });
    }
    Ok(trimmed)
}

/// Normalizes a person's name.
///
/// Whitespace runs collapse to a single space, the ends are trimmed, and each
/// word is capitalized with the remainder lowercased.
#[must_use]
pub fn format_name(nombre: &str) -> String {
    nombre
        .split_whitespace()
        .map(|palabra| {
            let mut chars = palabra.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Validates a professor's name: two or more alphabetic words.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the name is blank, or
/// `DomainError::InvalidName` if it has fewer than two words or a word
/// contains a non-alphabetic character.
pub fn validate_full_name(nombre: &str) -> Result<(), DomainError> {
    let trimmed: &str = require("name", nombre)?;

    let palabras: Vec<&str> = trimmed.split_whitespace().collect();
    if palabras.len() < 2 {
        return Err(DomainError::InvalidName(format!(
            "'{trimmed}' must contain at least two words"
        )));
    }

    if let Some(palabra) = palabras
        .iter()
        .find(|p| !p.chars().all(char::is_alphabetic))
    {
        return Err(DomainError::InvalidName(format!(
            "'{palabra}' contains characters other than letters"
        )));
    }

    Ok(())
}

/// Validates an email address.
///
/// The accepted shape is `local@domain.tld` where the local part is made of
/// word characters, dots and plus signs, the domain is a single label of word
/// characters, and the top-level domain has two or three word characters.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the address is blank, or
/// `DomainError::InvalidEmail` if it does not have the accepted shape.
pub fn validate_correo(correo: &str) -> Result<(), DomainError> {
    let trimmed: &str = require("email", correo)?;

    let invalid = || DomainError::InvalidEmail(format!("'{trimmed}' is not a valid address"));

    let (local, dominio) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || !local.chars().all(|c| is_word_char(c) || c == '.' || c == '+') {
        return Err(invalid());
    }

    let (nombre, tld) = dominio.split_once('.').ok_or_else(invalid)?;
    if nombre.is_empty() || !nombre.chars().all(is_word_char) {
        return Err(invalid());
    }
    if !(2..=3).contains(&tld.len()) || !tld.chars().all(is_word_char) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates a national ID and returns it with the letter uppercased.
///
/// The ID is 8 digits followed by a check letter. The number modulo 23
/// selects the expected letter from a fixed table.
///
/// # Errors
///
/// Returns `DomainError::Missing` if the ID is blank,
/// `DomainError::InvalidDni` if it is not 8 digits and a letter, or
/// `DomainError::WrongDniLetter` if the letter fails the checksum.
pub fn validate_dni(dni: &str) -> Result<String, DomainError> {
    let trimmed: &str = require("national ID", dni)?;

    let invalid = || DomainError::InvalidDni(format!("'{trimmed}' must be 8 digits and a letter"));

    let mut chars = trimmed.chars();
    let letra: char = chars.next_back().ok_or_else(invalid)?;
    let digitos: &str = chars.as_str();
    if digitos.len() != 8 || !digitos.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    if !letra.is_ascii_alphabetic() {
        return Err(invalid());
    }

    let numero: u32 = digitos.parse().map_err(|_| invalid())?;
    let expected: char = expected_dni_letter(numero);
    let letra: char = letra.to_ascii_uppercase();
    if letra != expected {
        return Err(DomainError::WrongDniLetter {
            dni: trimmed.to_string(),
            expected,
        });
    }

    Ok(format!("{digitos}{letra}"))
}

/// Returns the check letter for the numeric part of a national ID.
#[must_use]
pub const fn expected_dni_letter(numero: u32) -> char {
    LETRAS_DNI[(numero % 23) as usize]
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
