use precis_core::{Summarizer, SummarizerConfig};

pub const AI_ARTICLE: &str = "Artificial intelligence has revolutionized the way we interact with technology in the modern world. \
Machine learning algorithms have become increasingly sophisticated, enabling computers to learn from data and make predictions without being explicitly programmed. \
Deep learning, a subset of machine learning, uses neural networks with multiple layers to process complex patterns in large datasets. \
These technologies have found applications in various fields including healthcare, finance, transportation, and entertainment. \
In healthcare, AI systems can analyze medical images to detect diseases with remarkable accuracy, sometimes surpassing human experts. \
Financial institutions use machine learning algorithms to detect fraudulent transactions and assess credit risk. \
Self-driving cars rely on deep learning models to interpret sensor data and navigate safely through traffic. \
Natural language processing, another branch of AI, has enabled virtual assistants to understand and respond to human speech. \
Despite these advances, AI still faces significant challenges including bias in training data and concerns about privacy. \
Researchers are working on developing more ethical and explainable AI systems that can be trusted in critical applications.";

pub const IOT_ARTICLE: &str = "
    The Internet of Things refers to the network of physical devices embedded with sensors,
    software, and connectivity that enables them to collect and exchange data. Smart home devices
    like thermostats, security cameras, and lighting systems can be controlled remotely through
    smartphones. In industrial settings, IoT sensors monitor equipment performance and predict
    maintenance needs, reducing downtime and costs. Wearable fitness trackers collect health data
    to help users monitor their physical activity and vital signs. However, the proliferation of
    connected devices raises concerns about data privacy and cybersecurity!
";

pub fn sample_summarizer() -> Summarizer {
    Summarizer::new(SummarizerConfig::default())
}
