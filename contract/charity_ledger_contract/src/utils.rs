use soroban_sdk::{Env, String};

use crate::storage_types::{CharityError, DataKey, MAX_TEXT_BYTES, TTL_INSTANCE, TTL_PERSISTENT};

/// Current ledger sequence, the contract's clock
pub fn current_ledger(env: &Env) -> u32 {
    env.ledger().sequence()
}

pub fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

/// Amounts and goals must be strictly positive
pub fn validate_amount(amount: i128) -> Result<(), CharityError> {
    if amount <= 0 {
        return Err(CharityError::InvalidAmount);
    }
    Ok(())
}

/// Limits are in characters; a UTF-8 character is at most 4 bytes.
pub fn validate_text(text: &String, max_chars: u32) -> Result<(), CharityError> {
    let byte_len = text.len();
    if byte_len <= max_chars {
        return Ok(());
    }
    if byte_len > max_chars.saturating_mul(4) || byte_len as usize > MAX_TEXT_BYTES {
        return Err(CharityError::TextTooLong);
    }

    let mut buf = [0u8; MAX_TEXT_BYTES];
    let bytes = &mut buf[..byte_len as usize];
    text.copy_into_slice(bytes);

    if count_chars(bytes) > max_chars {
        return Err(CharityError::TextTooLong);
    }
    Ok(())
}

/// Counts UTF-8 characters by skipping continuation bytes
pub fn count_chars(bytes: &[u8]) -> u32 {
    bytes.iter().filter(|b| **b & 0xC0 != 0x80).count() as u32
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, CharityError> {
    a.checked_add(b).ok_or(CharityError::ArithmeticError)
}

/// floor(raised * 100 / goal), or 0 for a zero goal.
///
/// Exact for every result that fits in an i128; larger results saturate.
pub fn calculate_percentage(raised: i128, goal: i128) -> i128 {
    if goal <= 0 || raised <= 0 {
        return 0;
    }

    let whole = (raised / goal).saturating_mul(100);
    let rem = raised % goal;
    let part = match rem.checked_mul(100) {
        Some(scaled) => scaled / goal,
        None => scaled_remainder(rem as u128, goal as u128),
    };
    whole.saturating_add(part)
}

// floor(rem * 100 / goal) for rem < goal without forming rem * 100.
// The running sum stays below 2 * goal, which fits in a u128.
fn scaled_remainder(rem: u128, goal: u128) -> i128 {
    let mut acc = 0u128;
    let mut quotient = 0i128;
    for _ in 0..100 {
        acc += rem;
        if acc >= goal {
            acc -= goal;
            quotient += 1;
        }
    }
    quotient
}
