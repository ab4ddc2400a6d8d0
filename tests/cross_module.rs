//! Cross-module property tests
//!
//! Checks that decoding, padding and rendering agree with each other for
//! arbitrary inputs.

use proptest::prelude::*;
use vhdmem_loader::{decode_words, ConfigLoader, InstructionDecoder};
use vhdmem_render::{Renderer, TemplateSet};
use vhdmem_spec::{MemoryKind, MemorySpec, ZERO_WORD_HEX};

proptest! {
    #[test]
    fn prop_whole_word_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)
        .prop_map(|mut b| { b.truncate(b.len() / 4 * 4); b }))
    {
        let list = decode_words(&bytes);
        prop_assert_eq!(list.decoded_le_bytes(), bytes);
    }

    #[test]
    fn prop_program_padding_to_width(
        bytes in proptest::collection::vec(any::<u8>(), 0..96),
        width in 0u32..6,
    ) {
        let spec = MemorySpec::from_width(MemoryKind::Program, width).unwrap();
        let list = InstructionDecoder::new(spec.capacity).decode_bytes(&bytes).unwrap();
        let decoded = bytes.len() / 4;

        if decoded < spec.capacity {
            prop_assert_eq!(list.len(), spec.capacity);
            prop_assert!(list.hex_words()[decoded..].iter().all(|w| w == ZERO_WORD_HEX));
        } else {
            prop_assert_eq!(list.len(), decoded);
        }
        prop_assert!(list.hex_words().iter().all(|w| w.len() == 8
            && w.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))));
    }

    #[test]
    fn prop_rendered_program_lists_every_word(words in proptest::collection::vec(any::<u32>(), 1..20)) {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_le_bytes()).collect();
        let list = InstructionDecoder::new(words.len()).decode_bytes(&bytes).unwrap();
        let doc = Renderer::new(TemplateSet::builtin().unwrap()).render_program(&list).unwrap();

        for (i, w) in words.iter().enumerate() {
            let entry = format!("{} => x\"{:08X}\"", i, w);
            prop_assert!(doc.text.contains(&entry));
        }
    }

    #[test]
    fn prop_config_padding_to_width(text in "[0-9A-F]{0,40}", width in 2u32..9) {
        let spec = MemorySpec::from_width(MemoryKind::Config, width).unwrap();
        let config = ConfigLoader::new(spec.capacity).load_str(&format!("\n{}\n", text)).unwrap();

        if text.len() <= spec.capacity {
            prop_assert_eq!(config.len(), spec.capacity);
            prop_assert!(config.as_str().ends_with(&text));
        } else {
            prop_assert_eq!(config.as_str(), text.as_str());
        }
    }
}
