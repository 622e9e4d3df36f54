//! Opening questions posted into a new ticket thread.

use crate::server::model::ticket::TicketType;

const STAFF_APPLICATION: &str = "Welcome!!
The Faceless are currently looking for members to fill these roles:
Community Manager
Host
Moderator
Discord Admin
Promoter
New Community Outreach

Please let us know any and all positions that interest you!
Question 1:
Have you read and agreed to the rules of The Faceless? Are there any rules you don't see that you think should be there or any that you don't think should be there?
Question 2:
Please provide your VRC and Discord usernames
Question 3:
Have you ever staffed in VRC or for any event venues or clubs (IRL or VR) before? If so, where?
Question 4:
Which position(s) are you interested in?
Question 5:
When do you have free time normally?
Question 6:
What IRL and/or VR responsibilities do you currently have?
Question 7:
Do you feel comfortable with possible confrontation or having to mediate issues?
Question 8:
If you noticed an argument happening between 2 patrons during an event what steps would you take?
Question 9:
If you saw someone discussing politics or religion, what would be your response, if any?
Question 10:
How long have you been involved in the VR space if at all?
Question 11:
We currently have our staff meetings at 6PM CST on Mondays - are you generally available at that time? (this is NOT a requirement!)
Question 12:
Which time zone are you based in?
Question 13:
What does being a member of The Faceless mean to you?
Question 14:
What do you know about the VRUnderground Oasis, if anything?
Question 15:
What do you get on VRChat with?
Question 16:
Is there anything that we can do to help make your duties more accessible?
Question 17:
Any additional interests and hobbies?
Question 18:
Are there any references you might like to provide?";

const GURU_APPLICATION: &str = "Thank you for your interest in sharing your knowledge and interest with our group!

Question 1:
Please let us know the nature of the class you are interested in providing or would like to see added.
Question 2:
If you would be the one teaching or giving said class (in any subject/field! some examples include: Tarot, meditation, workouts, dance, philosophy, language, etc...) If not, are you aware of somebody who'd be interested in giving said class?
Question 3:
Do you have any credentials or how long have you been practicing?
Question 4:
What day of the week and time works best for you to teach your class? Are you interested in running it on a regular cadence (weekly, biweekly, once a month, etc.) or more ad-hoc?
Question 5:
What style(s) of class do you want to teach? (ie. lectures, workshops, a club, VR dance, etc.)";

const ISSUE_REPORT: &str = "What's the issue you're experiencing? If it's a bot or troublesome user, please provide the full discord account name (and User ID if you know how to, no worries if not!), as well as screenshot proof of the issue.

A staff member will get in contact with you as soon as possible! Thank you for your patience.";

pub fn template_questions(ticket_type: TicketType) -> &'static str {
    match ticket_type {
        TicketType::StaffApplication => STAFF_APPLICATION,
        TicketType::GuruApplication => GURU_APPLICATION,
        TicketType::IssueReport => ISSUE_REPORT,
    }
}
