/// Examine text for an item, or `None` for items the catalogue does not
/// describe (such as the seed pouch the shears uncover).
pub fn describe(item: &str) -> Option<&'static str> {
    let text = match item {
        "cigarette_case" => {
            "A silver case with elegant initials that match the host's surname. Inside, only \
             faint tobacco residue remains. Its owner might have stepped away in a hurry."
        }
        "matches" => {
            "A small box of matches with the manor's crest printed on it. These could ignite \
             your lantern or rekindle a clue hidden in the darkness."
        }
        "bloody_handkerchief" => {
            "A once-fine handkerchief, now stained deep red. The embroidery on the corner looks \
             like it could match the victim's monogram. A silent witness to the crime."
        }
        "mysterious_letter" => {
            "A letter with a broken seal and frantic handwriting. It warns of hidden debts, \
             whispers of blackmail, and dire consequences if secrets are not revealed."
        }
        "old_key" => {
            "An old iron key with intricate detailing. It seems important, perhaps it opens a \
             heavily locked door to a place where only the owner dared to tread."
        }
        "incriminating_ledger" => {
            "A heavy ledger filled with records of illicit dealings, unpaid debts, and names \
             that should never see the light of day. This is the heart of a deadly motive."
        }
        "carving_knife" => {
            "A sturdy kitchen knife, its blade still sharp enough to pry open more than just a \
             lock. In the right (or wrong) hands, it could have ended a life."
        }
        "lantern" => {
            "A wrought-iron lantern with a sooty glass pane. If lit, it will illuminate the \
             darkest halls, revealing hidden rooms and long-buried secrets."
        }
        "silk_scarf" => {
            "A fine silk scarf, strong yet delicate. With it, you could descend from a height \
             safely, or perhaps retrace someone's clandestine escape route."
        }
        "orchard_ladder" => {
            "A folding ladder stashed outdoors. Perfect for reaching high places or safely \
             navigating treacherous terrain. Whoever used it likely knew these grounds well."
        }
        "pruning_shears" => {
            "Heavy-duty gardening shears. With them, overgrown foliage could be cleared, \
             uncovering concealed evidence or a secret path."
        }
        "rope" => {
            "A length of sturdy rope, suitable for climbing or securing loads. A resourceful \
             visitor might use it to access areas otherwise unreachable."
        }
        "strange_token" => {
            "A small, carved token bearing foreign symbols. Its origin is unclear, but it may \
             link to old debts or distant transactions hinted at in the ledger."
        }
        "caretaker_journal" => {
            "A meticulously kept journal detailing arrivals, departures, and late-night \
             movements. Its observations could place someone at the scene of the crime at the \
             wrong time."
        }
        "perfume_bottle" => {
            "A delicate glass bottle with a faint floral scent. A personal touch that might \
             connect a guest, or the victim, to a particular room or secret rendezvous."
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_items_have_text() {
        assert!(describe("old_key").unwrap().contains("iron key"));
        assert!(describe("lantern").unwrap().starts_with("A wrought-iron lantern"));
    }

    #[test]
    fn unknown_items_have_none() {
        assert_eq!(describe("rare_seed_pouch"), None);
        assert_eq!(describe("Old_Key"), None);
    }
}
