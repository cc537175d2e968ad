mod chat_test;
mod prescriptions_test;
