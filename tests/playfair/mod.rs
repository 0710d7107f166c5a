use rand::{thread_rng, Rng};

use cipherbook::playfair::{self, digraphs, KeyMatrix, SIZE};

use crate::common::rand_upper;

#[test]
fn playfair_textbook() {
    let key = "PLAYFAIREXAMPLE";
    let cipher = playfair::encode("HIDETHEGOLDINTHETREESTUMP", key).unwrap();
    assert_eq!(cipher, "BMODZBXDNABEKUDMUIXMMOUVIF");

    // decoding keeps the filler X between the doubled E
    let text = playfair::decode(&cipher, key).unwrap();
    assert_eq!(text, "HIDETHEGOLDINTHETREXESTUMP");
}

#[test]
fn playfair_key_matrix_complete() {
    let mut rng = thread_rng();

    for key in ["BALLOON", "PLAYFAIREXAMPLE", "", "JJJJ", "monarchy"].iter() {
        let matrix = KeyMatrix::build(key);
        let mut letters: Vec<char> = matrix.rows().iter().flatten().copied().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), SIZE * SIZE);
        assert!(!letters.contains(&'J'));
    }

    for _ in 0..32 {
        let len = rng.gen_range::<usize, usize, usize>(0, 64);
        let key = rand_upper(&mut rng, len);
        let matrix = KeyMatrix::build(&key);
        for row in matrix.rows().iter() {
            for &c in row.iter() {
                assert_eq!(matrix.locate(c).map(|(r, col)| matrix.at(r, col)), Ok(c));
            }
        }
    }
}

#[test]
fn playfair_round_trip_padded() {
    let mut rng = thread_rng();

    for _ in 0..64 {
        let key_len = rng.gen_range::<usize, usize, usize>(1, 20);
        let key = rand_upper(&mut rng, key_len);
        let text_len = rng.gen_range::<usize, usize, usize>(0, 80);
        let text: String = rand_upper(&mut rng, text_len).replace('J', "I");

        // a round trip reproduces the digraph-padded text
        let padded: String = digraphs(&text.chars().collect::<Vec<char>>())
            .into_iter()
            .flat_map(|(a, b)| vec![a, b])
            .collect();

        let cipher = playfair::encode(&text, &key).unwrap();
        assert_eq!(cipher.len() % 2, 0);
        assert_eq!(playfair::decode(&cipher, &key).unwrap(), padded);
    }
}
