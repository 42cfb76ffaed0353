mod advice_test;
mod health_test;
