use rand::{thread_rng, Rng};

use cipherbook::vigenere;

use crate::common::rand_upper;

#[test]
fn vigenere_textbook() {
    let cipher = vigenere::encode("ATTACKATDAWN", "LEMON").unwrap();
    assert_eq!(cipher, "LXFOPVEFRNHR");
    assert_eq!(vigenere::decode(&cipher, "LEMON").unwrap(), "ATTACKATDAWN");
}

#[test]
fn vigenere_round_trip() {
    let mut rng = thread_rng();

    for _ in 0..64 {
        let key_len = rng.gen_range::<usize, usize, usize>(1, 16);
        let key = rand_upper(&mut rng, key_len);
        let text_len = rng.gen_range::<usize, usize, usize>(0, 128);
        let text = rand_upper(&mut rng, text_len);

        let cipher = vigenere::encode(&text, &key).unwrap();
        assert_eq!(cipher.len(), text.len());
        assert_eq!(vigenere::decode(&cipher, &key).unwrap(), text);
    }
}

#[test]
fn vigenere_single_letter_key_is_caesar() {
    assert_eq!(vigenere::encode("HELLO", "D").unwrap(), "KHOOR");
    assert_eq!(vigenere::decode("KHOOR", "D").unwrap(), "HELLO");

    // A shifts by zero
    assert_eq!(vigenere::encode("HELLO", "A").unwrap(), "HELLO");
}
