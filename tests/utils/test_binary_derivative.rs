use rstest::*;
use tsentropy::estimators::utils::binary_derivative::binary_derivative;

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![0, 1], vec![1])]
#[case(vec![1, 1], vec![0])]
#[case(vec![1, 0, 1, 1], vec![1, 1, 0])]
#[case(vec![0, 1, 0, 1, 0], vec![1, 1, 1, 1])]
fn derivative_is_pairwise_xor(#[case] bits: Vec<u8>, #[case] expected: Vec<u8>) {
    assert_eq!(binary_derivative(&bits).to_vec(), expected);
}

#[test]
fn derivative_chain_shrinks_by_one() {
    let mut bits = vec![1u8, 0, 0, 1, 1, 1, 0, 1];
    let mut len = bits.len();
    while len > 1 {
        bits = binary_derivative(&bits).to_vec();
        assert_eq!(bits.len(), len - 1);
        len = bits.len();
    }
}
