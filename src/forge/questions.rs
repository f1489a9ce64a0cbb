//! The quiz question table.

use crate::models::{Stat, StatDelta};

use Stat::*;

/// One selectable answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub key: char,
    pub text: &'static str,
    pub deltas: &'static [StatDelta],
}

/// A prompt and its answers, keyed `a` through `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: &'static [AnswerOption],
}

impl Question {
    /// Look up an answer by key. Surrounding whitespace and case are ignored.
    pub fn option(&self, input: &str) -> Option<&'static AnswerOption> {
        let mut chars = input.trim().chars();
        let key = chars.next()?.to_ascii_lowercase();
        if chars.next().is_some() {
            return None;
        }
        self.options.iter().find(|opt| opt.key == key)
    }

    /// Valid keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.options.iter().map(|opt| opt.key)
    }
}

pub const QUESTIONS: &[Question] = &[
    Question {
        prompt: "When you hear the call to adventure, your first thought is:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Armor on. If there's danger, meet it head-on.",
                deltas: &[(Bravery, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Plot something clever; advantage wins fights.",
                deltas: &[(Cunning, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "What ancient secret waits? Research first.",
                deltas: &[(Curiosity, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Who can I charm into helping me? People matter.",
                deltas: &[(Charm, 2), (Empathy, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "I go because it's my duty. Someone must.",
                deltas: &[(Faith, 2), (Honor, 1)],
            },
        ],
    },
    Question {
        prompt: "You find a locked chest. How do you approach it?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Smash it open and hope for the best.",
                deltas: &[(Bravery, 2), (Recklessness, 2)],
            },
            AnswerOption {
                key: 'b',
                text: "Pick the lock or lift the key quietly.",
                deltas: &[(Cunning, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Examine runes, study wards and traps.",
                deltas: &[(Curiosity, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Ask someone else to open it. Conversation first.",
                deltas: &[(Charm, 2), (Empathy, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Pray or ask the gods for a sign about it.",
                deltas: &[(Faith, 2), (Honor, 1)],
            },
        ],
    },
    Question {
        prompt: "Someone insults your homeland in public. Your reaction:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Sword in hand; teach them respect.",
                deltas: &[(Bravery, 2), (Honor, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "A cutting joke that leaves them speechless.",
                deltas: &[(Cunning, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "You make a calm note of it and study why.",
                deltas: &[(Curiosity, 1), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Diffuse with charm and a laugh.",
                deltas: &[(Charm, 2)],
            },
            AnswerOption {
                key: 'e',
                text: "You forgive; anger accomplishes little.",
                deltas: &[(Empathy, 2), (Faith, 1)],
            },
        ],
    },
    Question {
        prompt: "Campfire: a child asks why stars burn. You say:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "They are watchful sentinels, ready for war.",
                deltas: &[(Bravery, 1), (Honor, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "They’re holes poked into the dark by the bored gods.",
                deltas: &[(Mischief, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Burning suns, far away—physics, wonder, repeat.",
                deltas: &[(Curiosity, 2)],
            },
            AnswerOption {
                key: 'd',
                text: "Because someone needed a good story stage.",
                deltas: &[(Charm, 2)],
            },
            AnswerOption {
                key: 'e',
                text: "They remind us that light outlasts suffering.",
                deltas: &[(Faith, 2), (Empathy, 1)],
            },
        ],
    },
    Question {
        prompt: "Your party is ambushed at night. You:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Charge with torch aloft!",
                deltas: &[(Bravery, 2), (Recklessness, 2)],
            },
            AnswerOption {
                key: 'b',
                text: "Slip, stab, vanish—be a whisper.",
                deltas: &[(Cunning, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Cast a spell from memory; magic solves problems.",
                deltas: &[(Curiosity, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Inspire the group—words make steel.",
                deltas: &[(Charm, 2), (Honor, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Shield the wounded and pray for them.",
                deltas: &[(Faith, 2), (Empathy, 1)],
            },
        ],
    },
    Question {
        prompt: "You meet a beggar who knows a secret — how do you extract it?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Intimidate until they speak.",
                deltas: &[(Bravery, 1), (Recklessness, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Pay or ply them with coin and charm.",
                deltas: &[(Charm, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Offer help in exchange; kindness works.",
                deltas: &[(Empathy, 2)],
            },
            AnswerOption {
                key: 'd',
                text: "Trick them with a small riddle.",
                deltas: &[(Mischief, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Research elsewhere—books over people.",
                deltas: &[(Curiosity, 2)],
            },
        ],
    },
    Question {
        prompt: "You are betrayed by an ally — what is your course?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "A duel; honor demands satisfaction.",
                deltas: &[(Bravery, 2), (Honor, 2)],
            },
            AnswerOption {
                key: 'b',
                text: "A cold, calculated scheme for revenge.",
                deltas: &[(Cunning, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "An emotional implosion—you nurse the wound.",
                deltas: &[(Empathy, 2), (Stoicism, -1)],
            },
            AnswerOption {
                key: 'd',
                text: "Forgive publicly and watch them squirm.",
                deltas: &[(Charm, 1), (Mischief, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Appeal to your god and let them judge.",
                deltas: &[(Faith, 2)],
            },
        ],
    },
    Question {
        prompt: "Which contradiction appeals to you most as a roleplaying seed?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Fearless fighter who collects delicate teacups.",
                deltas: &[(Stoicism, 1), (Bravery, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Smooth talker who lies to themselves most.",
                deltas: &[(Charm, 1), (Mischief, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Scholar who creates accidental chaos.",
                deltas: &[(Curiosity, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Pious zealot who sometimes doubts in private.",
                deltas: &[(Faith, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Rogue with an odd strict code of honor.",
                deltas: &[(Cunning, 2), (Honor, 2)],
            },
        ],
    },
    Question {
        prompt: "Your signature move in a tavern brawl is:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Shield bash and a heroic speech.",
                deltas: &[(Bravery, 1), (Charm, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Slip behind the bar and trip everyone.",
                deltas: &[(Cunning, 2), (Mischief, 2)],
            },
            AnswerOption {
                key: 'c',
                text: "Set a distracting minor illusion.",
                deltas: &[(Curiosity, 2)],
            },
            AnswerOption {
                key: 'd',
                text: "Sing a song that confuses the thugs.",
                deltas: &[(Charm, 2)],
            },
            AnswerOption {
                key: 'e',
                text: "Refuse to fight and try to calm folks.",
                deltas: &[(Empathy, 2)],
            },
        ],
    },
    Question {
        prompt: "You find a magical patron offering power at a price. You:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Refuse. Power from bargains is suspect.",
                deltas: &[(Honor, 1), (Faith, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Carefully read the contract. Every price has loopholes.",
                deltas: &[(Curiosity, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Accept! A cheeky bargain is an opportunity.",
                deltas: &[(Mischief, 2), (Recklessness, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Negotiate terms and charm the patron.",
                deltas: &[(Charm, 2), (Cunning, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Pray for guidance and act under divine counsel.",
                deltas: &[(Faith, 2)],
            },
        ],
    },
    Question {
        prompt: "Pick a petty obsession for flavor:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Collecting spoons.",
                deltas: &[(Mischief, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Naming every horse you see.",
                deltas: &[(Charm, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Studying odd handwriting.",
                deltas: &[(Curiosity, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Keeping a secret ledger of debts.",
                deltas: &[(Cunning, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Polishing armor at inopportune times.",
                deltas: &[(Stoicism, 1)],
            },
        ],
    },
    Question {
        prompt: "Your greatest fear, deep down, is:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Cowardice—being remembered as small.",
                deltas: &[(Bravery, 1), (Honor, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Irrelevance—no songs sung of your deeds.",
                deltas: &[(Charm, 1), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Losing your mind to curiosity's costs.",
                deltas: &[(Curiosity, 1), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Betrayal from those you trust.",
                deltas: &[(Empathy, 1), (Honor, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Being trapped by duty and never choosing.",
                deltas: &[(Faith, 1), (Recklessness, 1)],
            },
        ],
    },
    Question {
        prompt: "You're given an impossible moral choice that harms a few to save many. You:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Sacrifice yourself if needed—honor above all.",
                deltas: &[(Honor, 2), (Bravery, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Calculate the outcome and pick the most efficient option.",
                deltas: &[(Cunning, 2)],
            },
            AnswerOption {
                key: 'c',
                text: "Try to find a third option; creativity wins.",
                deltas: &[(Curiosity, 1), (Charm, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Refuse to make the choice; it's not yours to make.",
                deltas: &[(Faith, 1), (Empathy, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Do whatever is required; the ends justify the means.",
                deltas: &[(Recklessness, 2), (Stoicism, 1)],
            },
        ],
    },
    Question {
        prompt: "Your preferred role in a party is:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Frontline: take hits and deal them.",
                deltas: &[(Bravery, 2), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Scout: get info and open doors.",
                deltas: &[(Cunning, 2), (Curiosity, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Controller: manipulate the battlefield.",
                deltas: &[(Curiosity, 2), (Mischief, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Face: negotiate, distract, seduce.",
                deltas: &[(Charm, 2), (Empathy, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Healer/Anchor: keep the group alive.",
                deltas: &[(Faith, 2), (Empathy, 1)],
            },
        ],
    },
    Question {
        prompt: "What adjective best decorates your fighting style?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Brutal",
                deltas: &[(Bravery, 1), (Recklessness, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Sly",
                deltas: &[(Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "Elegant",
                deltas: &[(Charm, 1), (Stoicism, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "Arcane",
                deltas: &[(Curiosity, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Righteous",
                deltas: &[(Faith, 1), (Honor, 1)],
            },
        ],
    },
    Question {
        prompt: "If you could steal one abstract thing from a king it would be:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "Their crown—symbols matter.",
                deltas: &[(Honor, 1), (Bravery, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "Their secrets—blackmail is useful.",
                deltas: &[(Cunning, 2)],
            },
            AnswerOption {
                key: 'c',
                text: "Their library—knowledge is power.",
                deltas: &[(Curiosity, 2)],
            },
            AnswerOption {
                key: 'd',
                text: "Their applause—fame's currency.",
                deltas: &[(Charm, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "Their forgiveness—free the oppressed.",
                deltas: &[(Faith, 1), (Empathy, 1)],
            },
        ],
    },
    Question {
        prompt: "Which creature would you secretly like to befriend?",
        options: &[
            AnswerOption {
                key: 'a',
                text: "A loyal hound.",
                deltas: &[(Honor, 1), (Empathy, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "A clever fox.",
                deltas: &[(Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "An ancient owl.",
                deltas: &[(Curiosity, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "A mischievous raccoon.",
                deltas: &[(Mischief, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "A noble stag.",
                deltas: &[(Stoicism, 1), (Faith, 1)],
            },
        ],
    },
    Question {
        prompt: "Final theatrical flourish: choose your signature line to speak in battle:",
        options: &[
            AnswerOption {
                key: 'a',
                text: "'For honor!' (and charge)",
                deltas: &[(Honor, 1)],
            },
            AnswerOption {
                key: 'b',
                text: "'Now you've made a mistake.' (quietly lethal)",
                deltas: &[(Cunning, 1)],
            },
            AnswerOption {
                key: 'c',
                text: "'Witness wonders!' (arcane flourish)",
                deltas: &[(Curiosity, 1)],
            },
            AnswerOption {
                key: 'd',
                text: "'Sing with me!' (inspire allies)",
                deltas: &[(Charm, 1)],
            },
            AnswerOption {
                key: 'e',
                text: "'By their light, we stand!' (blessing)",
                deltas: &[(Faith, 1)],
            },
        ],
    },
];
