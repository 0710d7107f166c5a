use rand::{thread_rng, Rng};

use cipherbook::rail_fence;

use crate::common::rand_printable;

#[test]
fn rail_fence_textbook() {
    let cipher = rail_fence::encode("WEAREDISCOVEREDFLEEATONCE", 3).unwrap();
    assert_eq!(cipher, "WECRLTEERDSOEEFEAOCAIVDEN");
    assert_eq!(
        rail_fence::decode(&cipher, 3).unwrap(),
        "WEAREDISCOVEREDFLEEATONCE"
    );
}

#[test]
fn rail_fence_round_trip() {
    let mut rng = thread_rng();

    for _ in 0..64 {
        let text_len = rng.gen_range::<usize, usize, usize>(1, 100);
        let text = rand_printable(&mut rng, text_len);
        let len = text.chars().count();
        let rails = rng.gen_range::<usize, usize, usize>(1, len + 2);

        let cipher = rail_fence::encode(&text, rails).unwrap();
        assert_eq!(cipher.chars().count(), len);
        assert_eq!(rail_fence::decode(&cipher, rails).unwrap(), text);
    }
}

#[test]
fn rail_fence_single_rail() {
    assert_eq!(rail_fence::encode("ANYTHING", 1).unwrap(), "ANYTHING");
    assert_eq!(rail_fence::decode("ANYTHING", 1).unwrap(), "ANYTHING");
}
