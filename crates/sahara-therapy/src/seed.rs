//! Demo curricula, ported from the platform's one-time data loaders: the
//! pre-assessment observation program auto-assigned at case submission, the
//! 15-day introductory therapy program, and the specialized 30/45-day
//! programs.

use tracing::info;

use sahara_core::models::curriculum::{Curriculum, CurriculumKind};
use sahara_store::RecordStore;

use crate::curriculum::{self, NewCurriculum, NewTask};
use crate::error::TherapyError;

fn task(day_number: u16, order_index: u16, title: &str, why: &str, instructions: &str) -> NewTask {
    NewTask {
        day_number,
        title: title.to_string(),
        why_description: why.to_string(),
        instructions: instructions.to_string(),
        demo_video_url: None,
        order_index,
    }
}

/// Register all demo curricula. Returns them in registration order, the
/// pre-assessment program first.
pub fn seed_demo_curricula(store: &RecordStore) -> Result<Vec<Curriculum>, TherapyError> {
    let curricula = vec![
        seed_assessment_program(store)?,
        seed_introductory_program(store)?,
        seed_communication_program(store)?,
        seed_comprehensive_program(store)?,
    ];
    for c in &curricula {
        info!(title = %c.title, duration_days = c.duration_days, "seeded curriculum");
    }
    Ok(curricula)
}

/// The 15-day pre-assessment observation program. System-created (no doctor);
/// its kind makes `cases::submit_for_review` auto-assign it.
pub fn seed_assessment_program(store: &RecordStore) -> Result<Curriculum, TherapyError> {
    let program = curriculum::register_curriculum(
        store,
        NewCurriculum {
            title: "15-Day Pre-Assessment Program".to_string(),
            description: "A structured 15-day observation program to help identify \
                developmental patterns. Each day includes tasks across social \
                engagement, joint attention, communication, play skills, and \
                cognitive/self-help categories."
                .to_string(),
            duration_days: 15,
            kind: CurriculumKind::Assessment,
            spectrum_focus: None,
            created_by: None,
        },
    )?;

    let tasks = [
        task(
            1, 1,
            "Morning Face Time",
            "Observes social engagement and eye contact, a key indicator of social development.",
            "1. Sit facing your child after they wake up\n2. Smile and say \"Good morning [Name]!\"\n3. Wait 5 seconds for any look\n4. Repeat 3 times\n\nObserve: did the child look at your face, smile back, or not respond?",
        ),
        task(
            1, 2,
            "Point to Treat",
            "Assesses joint attention - following a point is an important developmental milestone.",
            "1. Place a favorite snack on the table\n2. Point to it from a short distance\n3. Say \"Look!\"\n4. Note whether the child follows your point to the snack",
        ),
        task(
            1, 3,
            "Choice Making",
            "Observes communication of preference through reaching, pointing, or vocalizing.",
            "1. Hold up two toys\n2. Ask \"Which one?\"\n3. Wait for reaching, pointing, or sounds\n4. Give the chosen toy immediately",
        ),
        task(
            1, 4,
            "Car Fun",
            "Observes how the child plays with a toy - functional rolling versus repetitive spinning.",
            "1. Give the child a toy car\n2. Model rolling it: \"Vroom!\"\n3. Watch how the child uses it\n\nObserve: rolling, spinning wheels, mouthing, or no interest?",
        ),
        task(
            1, 5,
            "In/Out Game",
            "Assesses simple cognitive skills and imitation with containers.",
            "1. Use a box and a few blocks\n2. Model putting blocks in and taking them out\n3. Hand a block to the child\n4. Note whether they imitate",
        ),
        task(
            2, 1,
            "Mirror Play",
            "Observes self-recognition and social smiling in front of a mirror.",
            "1. Sit with the child facing a mirror\n2. Wave and make faces\n3. Watch the child's reaction to their reflection",
        ),
        task(
            2, 2,
            "Surprise Bag",
            "Observes curiosity, shared attention, and reactions to novel objects.",
            "1. Put three small toys in a bag\n2. Pull one out with excitement: \"Wow!\"\n3. Watch whether the child looks at you, the toy, or both",
        ),
        task(
            2, 3,
            "Animal Sounds",
            "Assesses vocal imitation and anticipatory engagement.",
            "1. Show an animal picture or toy\n2. Make its sound: \"Moo!\"\n3. Pause and wait\n4. Note any attempt to imitate",
        ),
        task(
            2, 4,
            "Block Stacking",
            "Assesses fine motor skills and tolerance for turn taking.",
            "1. Stack two blocks, then offer one to the child\n2. Say \"Your turn\"\n3. Note whether they stack, knock down, or ignore",
        ),
        task(
            2, 5,
            "Big & Small",
            "Observes early concept understanding with objects of different sizes.",
            "1. Show a big and a small ball\n2. Say \"big\" and \"small\" while holding each\n3. Ask for the big one\n4. Note the response",
        ),
        task(
            3, 1,
            "Tickle Countdown",
            "Assesses anticipation and social engagement through predictable, fun interaction.",
            "1. \"I'm going to tickle... 1... 2... 3... TICKLE!\"\n2. Tickle under arms/chin\n3. Look for an anticipation look during the count\n4. Repeat 2-3 times",
        ),
        task(
            3, 2,
            "Window Watching",
            "Evaluates joint attention in a natural setting - sharing interest in the outside world.",
            "1. Stand by a window with the child\n2. Point to something outside: \"Look! Bird!\"\n3. Alternate gaze between outside and the child\n4. Note whether they follow the point and share gaze",
        ),
        task(
            3, 3,
            "Gesture for 'More'",
            "Gesture use is key for pre-verbal communication assessment.",
            "1. When the child wants more of something\n2. Tap your fingertips together: \"More?\"\n3. Give more immediately on any attempt\n4. Repeat each time they want more",
        ),
        task(
            3, 4,
            "Simple Puzzle",
            "Assesses problem solving, fine motor skills, and working toward a goal.",
            "1. Use a 2-piece shape sorter or simple puzzle\n2. Show how a piece fits\n3. Give the piece to the child\n4. Help hand-over-hand if needed",
        ),
        task(
            3, 5,
            "Follow Simple Command",
            "Assesses receptive language during daily routines.",
            "1. Give one command during routines: \"Come here\", \"Sit down\", \"Give me\"\n2. Use a gesture with the words\n3. Praise immediately if followed",
        ),
    ];
    for t in tasks {
        curriculum::add_task(store, program.id, t)?;
    }
    Ok(program)
}

/// The 15-day general introductory therapy program.
pub fn seed_introductory_program(store: &RecordStore) -> Result<Curriculum, TherapyError> {
    let program = curriculum::register_curriculum(
        store,
        NewCurriculum {
            title: "15-Day Introductory Program".to_string(),
            description: "A gentle introduction to therapy tasks designed for children \
                beginning their developmental journey. Focuses on basic communication, \
                social interaction, and motor skills."
                .to_string(),
            duration_days: 15,
            kind: CurriculumKind::General,
            spectrum_focus: None,
            created_by: None,
        },
    )?;

    let tasks = [
        task(1, 1, "Eye Contact Practice",
            "Eye contact is fundamental for social connection and communication development.",
            "1. Sit at the child's eye level\n2. Hold a favorite toy near your eyes\n3. When the child looks, smile and say their name\n4. Repeat 5-10 times throughout the day"),
        task(1, 2, "Name Response",
            "Responding to name is crucial for attention and safety.",
            "1. Call the child's name from different distances\n2. Wait 3 seconds for a response\n3. If none, gently guide their attention\n4. Praise any response attempt"),
        task(2, 1, "Joint Attention - Pointing",
            "Joint attention is the foundation for shared experiences and learning.",
            "1. Point to interesting objects around the room\n2. Say \"Look!\" enthusiastically\n3. Wait for the child to follow your point\n4. Celebrate when they look at the object"),
        task(2, 2, "Simple Imitation",
            "Imitation skills are essential for learning new behaviors.",
            "1. Start with simple actions: clap hands, wave\n2. Do the action and say \"Do this!\"\n3. Help physically if needed\n4. Praise all attempts"),
        task(3, 1, "Turn Taking with Toys",
            "Turn taking builds patience and social reciprocity.",
            "1. Roll a ball back and forth\n2. Say \"My turn\" then \"Your turn\"\n3. Keep turns short (5-10 seconds)\n4. Use a timer for visual support"),
        task(3, 2, "Following Simple Commands",
            "Following instructions is important for learning and safety.",
            "1. Give one-step commands: \"Sit down\", \"Come here\"\n2. Use gestures along with words\n3. Give 5 seconds to respond\n4. Help physically if needed, then praise"),
        task(4, 1, "Requesting Practice",
            "Teaching requesting reduces frustration and builds communication.",
            "1. Hold a favorite item just out of reach\n2. Wait for any communication attempt\n3. Accept pointing, reaching, or sounds\n4. Give the item immediately when they request"),
        task(5, 1, "Sensory Play",
            "Sensory activities support regulation and exploration.",
            "1. Set up playdough or kinetic sand\n2. Let the child explore at their own pace\n3. Model simple actions: roll, poke, flatten\n4. Describe what you're doing"),
        task(6, 1, "Social Smile Practice",
            "Social smiling strengthens bonds and communication.",
            "1. Make funny faces to encourage smiles\n2. Respond warmly to any smiles\n3. Play peek-a-boo games\n4. Take photos of happy moments"),
        task(7, 1, "Book Reading Together",
            "Shared book reading builds language and attention.",
            "1. Choose books with bright pictures\n2. Point to and name pictures\n3. Let the child turn pages\n4. Keep sessions short (2-5 minutes)"),
        task(8, 1, "Music and Movement",
            "Music supports language development and motor skills.",
            "1. Play favorite songs\n2. Do simple movements together\n3. Pause and wait for the child to request more\n4. Use instruments like drums or shakers"),
        task(9, 1, "Outdoor Exploration",
            "Nature provides rich sensory and learning experiences.",
            "1. Take a short walk outside\n2. Point out birds, trees, flowers\n3. Let the child touch safe natural items\n4. Describe what you see and hear"),
        task(10, 1, "Pretend Play Introduction",
            "Pretend play develops imagination and social skills.",
            "1. Use toy cups and plates\n2. Pretend to drink and eat\n3. Offer pretend food to the child\n4. Keep play simple and repetitive"),
        task(11, 1, "Choice Making",
            "Making choices builds autonomy and decision-making.",
            "1. Offer two clear choices\n2. Hold items up for the child to see\n3. Wait for pointing or reaching\n4. Honor their choice immediately"),
        task(12, 1, "Emotion Recognition",
            "Understanding emotions helps with social development.",
            "1. Use picture cards of faces\n2. Name emotions: happy, sad, angry\n3. Make the faces yourself\n4. Point out emotions in real life"),
        task(13, 1, "Gross Motor Play",
            "Physical activity supports overall development.",
            "1. Play with balls - rolling, throwing\n2. Practice jumping or hopping\n3. Set up a simple obstacle course\n4. Celebrate all attempts"),
        task(14, 1, "Fine Motor Activities",
            "Fine motor skills are essential for daily tasks.",
            "1. Practice stacking blocks\n2. Do simple puzzles together\n3. Practice picking up small items\n4. Use pincer grasp activities"),
        task(15, 1, "Review and Celebration",
            "Celebrating progress motivates continued effort.",
            "1. Review favorite activities from the program\n2. Notice improvements in skills\n3. Take progress photos/videos\n4. Plan for continued practice"),
    ];
    for t in tasks {
        curriculum::add_task(store, program.id, t)?;
    }
    Ok(program)
}

/// The 30-day specialized communication program.
pub fn seed_communication_program(store: &RecordStore) -> Result<Curriculum, TherapyError> {
    curriculum::register_curriculum(
        store,
        NewCurriculum {
            title: "30-Day Communication Focus".to_string(),
            description: "Specialized curriculum focusing on speech and communication \
                skills development. Includes activities for verbal and non-verbal \
                communication improvement."
                .to_string(),
            duration_days: 30,
            kind: CurriculumKind::Specialized,
            spectrum_focus: Some("mild".to_string()),
            created_by: None,
        },
    )
}

/// The 45-day specialized comprehensive program.
pub fn seed_comprehensive_program(store: &RecordStore) -> Result<Curriculum, TherapyError> {
    curriculum::register_curriculum(
        store,
        NewCurriculum {
            title: "45-Day Comprehensive Development".to_string(),
            description: "Complete developmental program covering social skills, \
                communication, sensory processing, and daily living activities."
                .to_string(),
            duration_days: 45,
            kind: CurriculumKind::Specialized,
            spectrum_focus: Some("moderate".to_string()),
            created_by: None,
        },
    )
}
