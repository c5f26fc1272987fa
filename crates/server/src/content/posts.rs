//! Published blog posts

use super::blog::BlogPost;

pub(crate) static POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "how-ai-is-transforming-education",
        title: "How AI is Transforming Education: A Guide for Teachers",
        excerpt: "Discover how artificial intelligence is revolutionizing the way teachers create educational content and engage with students.",
        content: r#"<p>Artificial Intelligence is no longer a futuristic concept—it's here, and it's changing the way we teach. From personalized learning experiences to automated grading, AI tools are helping educators save time and improve student outcomes.</p>

<h2>The Rise of AI in Education</h2>
<p>Over the past few years, we've seen a dramatic increase in AI-powered educational tools. These range from intelligent tutoring systems to content generation platforms like Makos.ai that help teachers create customized worksheets in seconds.</p>

<h2>Benefits for Teachers</h2>
<ul>
  <li><strong>Time Savings:</strong> AI can generate worksheets, quizzes, and lesson plans in minutes instead of hours.</li>
  <li><strong>Personalization:</strong> Create content tailored to different learning levels and styles.</li>
  <li><strong>Consistency:</strong> Maintain high-quality educational materials across all your classes.</li>
  <li><strong>Focus on Teaching:</strong> Spend less time on administrative tasks and more time with students.</li>
</ul>

<h2>Getting Started with AI Tools</h2>
<p>The best way to start is with simple, practical tools. Worksheet generators like Makos.ai are perfect for teachers who want to experience the benefits of AI without a steep learning curve.</p>

<p>Try creating your first AI-generated worksheet today and see how much time you can save!</p>"#,
        date: "2026-01-31",
        author: "Makos.ai Team",
        image: None,
        tags: &["AI", "Education", "Teaching", "Technology"],
    },
    BlogPost {
        slug: "creating-effective-worksheets",
        title: "5 Tips for Creating Effective Worksheets That Students Love",
        excerpt: "Learn the secrets to designing worksheets that engage students and reinforce learning effectively.",
        content: r#"<p>Worksheets remain one of the most versatile teaching tools available. But not all worksheets are created equal. Here are five tips to make yours more effective.</p>

<h2>1. Start with Clear Learning Objectives</h2>
<p>Before creating any worksheet, ask yourself: What should students learn from this? Clear objectives lead to focused, purposeful content.</p>

<h2>2. Mix Question Types</h2>
<p>Variety keeps students engaged. Combine multiple choice, fill-in-the-blank, short answer, and essay questions to address different cognitive levels.</p>

<h2>3. Use Visual Elements</h2>
<p>Images, diagrams, and charts make worksheets more engaging, especially for younger learners or visual learners.</p>

<h2>4. Include Progressive Difficulty</h2>
<p>Start with easier questions to build confidence, then gradually increase complexity. This scaffolding approach helps all students succeed.</p>

<h2>5. Provide Clear Instructions</h2>
<p>Never assume students know what to do. Clear, concise instructions reduce confusion and frustration.</p>

<h2>Save Time with AI</h2>
<p>Creating great worksheets takes time—unless you use AI. Tools like Makos.ai can generate professional worksheets with varied question types in seconds, giving you more time to focus on teaching.</p>"#,
        date: "2026-01-30",
        author: "Makos.ai Team",
        image: None,
        tags: &["Worksheets", "Teaching Tips", "Education"],
    },
    BlogPost {
        slug: "blooms-taxonomy-question-stems-guide",
        title: "The Ultimate 2026 Guide to Bloom's Taxonomy Question Stems for All 6 Levels",
        excerpt: "Master the art of asking the right questions with this comprehensive guide to Bloom's Taxonomy question stems. From Remember to Create, unlock deeper learning in your classroom.",
        content: r#"<p>Are your classroom questions truly challenging students to think, or just to remember? The difference often lies in moving beyond simple recall to engage higher-order thinking skills, a journey mapped out perfectly by Bloom's Taxonomy. This foundational framework is a teacher's most powerful tool for designing instruction that builds deep comprehension, fosters critical analysis, and ultimately sparks genuine creativity.</p>

<p>Knowing the six levels of the taxonomy is one thing; having the right language to prompt each level of thinking is another. That's where a well-curated set of <strong>Bloom's Taxonomy question stems</strong> becomes indispensable. These powerful, open-ended prompts are the building blocks for creating dynamic lesson plans, engaging class discussions, and crafting meaningful assessments that accurately measure student learning.</p>

<p>This comprehensive guide is your one-stop resource for precisely that. We have organized hundreds of actionable question stems for every level of the taxonomy, from <strong>Remembering</strong> to <strong>Creating</strong>.</p>

<h2>1. Remember (Recall & Recognition Questions)</h2>
<p>The foundational level of Bloom's Taxonomy, <strong>Remember</strong>, is all about retrieving, recalling, or recognizing knowledge from long-term memory. This is the bedrock upon which all higher-order thinking is built.</p>

<h3>Sample "Remember" Question Stems</h3>
<ul>
  <li><strong>List</strong> the main characters in the story.</li>
  <li><strong>What is</strong> the definition of...?</li>
  <li><strong>Identify</strong> the parts of a plant cell.</li>
  <li><strong>When did</strong> the American Civil War begin?</li>
  <li><strong>Who wrote</strong> the Declaration of Independence?</li>
  <li><strong>Where is</strong> the capital of Australia?</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Use "Remember" questions for diagnostic assessments. Identifying gaps in foundational knowledge early allows you to provide targeted support before students fall behind.</blockquote>

<h2>2. Understand (Comprehension & Explanation Questions)</h2>
<p>Moving up one level from simple recall, <strong>Understand</strong> is where learning truly begins to take shape. Students must demonstrate their grasp of the material by explaining ideas, interpreting information, and summarizing concepts in their own words.</p>

<h3>Sample "Understand" Question Stems</h3>
<ul>
  <li><strong>Explain</strong> why the water cycle is important to Earth's ecosystems.</li>
  <li><strong>Describe</strong> the difference between a metaphor and a simile.</li>
  <li><strong>Summarize</strong> the main events leading to the American Revolution.</li>
  <li><strong>Classify</strong> the following numbers as prime or composite.</li>
  <li><strong>Compare and contrast</strong> mitochondria and chloroplasts.</li>
  <li><strong>Can you restate</strong> this passage in your own words?</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Use "Understand" questions as a pairing strategy. First, ask a "Remember" question, then follow up with an "Understand" question to assess the depth of student learning.</blockquote>

<h2>3. Apply (Using Information in New Situations)</h2>
<p>The third level of Bloom's Taxonomy, <strong>Apply</strong>, is where learning transitions from the abstract to the practical. This stage involves using learned knowledge, facts, rules, and procedures to solve problems in new situations.</p>

<h3>Sample "Apply" Question Stems</h3>
<ul>
  <li><strong>How would you use</strong> your knowledge of the water cycle to explain why a glass of ice water gets wet on the outside?</li>
  <li><strong>Apply</strong> the rules of subject-verb agreement to correct the following sentences.</li>
  <li><strong>Calculate</strong> the sale price of a $40 item with a 30% discount.</li>
  <li><strong>Demonstrate</strong> how to properly use a fire extinguisher.</li>
  <li><strong>Solve</strong> the following real-world math problem...</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Ground "Apply" questions in scenarios that are relevant to your students' lives. Connect math problems to budgeting allowance or science concepts to everyday phenomena.</blockquote>

<h2>4. Analyze (Breaking Down and Understanding Structure)</h2>
<p>Moving into the realm of higher-order thinking, <strong>Analyze</strong> challenges students to deconstruct material into its constituent parts to examine how those parts relate to one another.</p>

<h3>Sample "Analyze" Question Stems</h3>
<ul>
  <li><strong>Analyze</strong> the causes and effects of...</li>
  <li><strong>Compare and contrast</strong> the motivations of two different characters.</li>
  <li><strong>What is the relationship between</strong>...?</li>
  <li><strong>Differentiate</strong> between the fact and opinion in this article.</li>
  <li><strong>What evidence can you find to support</strong> the author's argument?</li>
  <li><strong>Break down</strong> the process of... into its main components.</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Provide graphic organizers like Venn diagrams, cause-and-effect chains, or T-charts to help students visually structure their analysis.</blockquote>

<h2>5. Evaluate (Making Judgments Based on Criteria)</h2>
<p>The fifth level, <strong>Evaluate</strong>, requires students to make informed judgments based on specific criteria and standards. This level moves beyond analysis to appraising, critiquing, and defending a position.</p>

<h3>Sample "Evaluate" Question Stems</h3>
<ul>
  <li><strong>Do you agree with</strong> the protagonist's decision? Justify your answer.</li>
  <li><strong>Evaluate the credibility</strong> of this source.</li>
  <li><strong>Assess the effectiveness</strong> of this mathematical approach.</li>
  <li><strong>Which is the better option?</strong> Defend your choice.</li>
  <li><strong>Judge the value of</strong> this experiment's results.</li>
  <li><strong>Critique the argument</strong> presented in this editorial.</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Always provide clear evaluative criteria before students respond. Supplying a rubric ensures students judge material based on relevant academic principles.</blockquote>

<h2>6. Create (Putting Elements Together to Form Something New)</h2>
<p>At the pinnacle of Bloom's Taxonomy, <strong>Create</strong> represents the highest level of cognitive skill. This level challenges students to generate, invent, compose, or design something entirely new.</p>

<h3>Sample "Create" Question Stems</h3>
<ul>
  <li><strong>Design</strong> a campaign to address a social issue in your community.</li>
  <li><strong>Compose</strong> a musical piece that reflects the mood of the novel's climax.</li>
  <li><strong>Invent</strong> a machine to solve an everyday problem.</li>
  <li><strong>Propose a solution</strong> for reducing plastic waste in our school.</li>
  <li><strong>Create</strong> a new ending for the story we just read.</li>
  <li><strong>Develop a plan</strong> to improve local public transportation.</li>
</ul>

<blockquote><strong>Pro-Tip:</strong> Provide clear constraints and a detailed rubric. An open-ended prompt can be overwhelming—structure like "Design a 3-minute video" guides creativity.</blockquote>

<h2>From Theory to Practice</h2>
<p>The true power of these <strong>Bloom's Taxonomy question stems</strong> lies not in their isolated use, but in their strategic and sequential application. A well-crafted lesson plan builds a sturdy cognitive ladder—students must first recall and understand before they can effectively apply and analyze.</p>

<h3>Your Actionable Roadmap</h3>
<ul>
  <li><strong>Start Small, Aim High:</strong> Choose one upcoming topic and deliberately plan one question from each of the six cognitive levels.</li>
  <li><strong>Make It Visible:</strong> Keep a quick reference of question stems on your desk during lesson planning.</li>
  <li><strong>Empower Student Metacognition:</strong> Teach your students about Bloom's Taxonomy so they understand how they are learning.</li>
</ul>

<blockquote><strong>Key Takeaway:</strong> The goal is not simply to ask "harder" questions. The goal is to ask the right questions at the right time to build durable understanding.</blockquote>

<p>Ready to supercharge your lesson planning? Let <strong>Makos.ai</strong> instantly generate worksheets, quizzes, and lesson plans filled with differentiated Bloom's Taxonomy question stems tailored to your exact curriculum.</p>"#,
        date: "2026-01-31",
        author: "Makos.ai Team",
        image: Some("https://cdn.outrank.so/05be71ab-637b-405a-8f9d-dac9cacc048d/74b24661-f1c9-4c03-bc4e-92cd6ac587c3/bloom's-taxonomy-question-stems-classroom-study.jpg"),
        tags: &["Bloom's Taxonomy", "Teaching Tips", "Question Stems", "Higher-Order Thinking", "Education"],
    },
];
