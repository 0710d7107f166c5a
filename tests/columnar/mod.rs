use rand::{thread_rng, Rng};

use cipherbook::columnar;

use crate::common::{rand_distinct_key, rand_printable};

#[test]
fn columnar_textbook() {
    let cipher = columnar::encode("HELLO", "DOG").unwrap();
    assert_eq!(cipher, "HLL_EO");
    assert_eq!(columnar::decode("HLL_EO", "DOG").unwrap(), "HELLO");
}

#[test]
fn columnar_round_trip() {
    let mut rng = thread_rng();

    for _ in 0..64 {
        let key_len = rng.gen_range::<usize, usize, usize>(1, 12);
        let key = rand_distinct_key(&mut rng, key_len);
        let text_len = rng.gen_range::<usize, usize, usize>(0, 100);
        let text = rand_printable(&mut rng, text_len);

        let cipher = columnar::encode(&text, &key).unwrap();
        assert_eq!(cipher.chars().count() % key.len(), 0);
        assert_eq!(columnar::decode(&cipher, &key).unwrap(), text);
    }
}

#[test]
fn columnar_keeps_unicode() {
    let cipher = columnar::encode("héllo wörld", "KEY").unwrap();
    assert_eq!(cipher.chars().count(), 12);
    assert_eq!(columnar::decode(&cipher, "KEY").unwrap(), "héllowörld");
}
